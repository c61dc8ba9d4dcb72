mod home;
pub use home::Home;

mod signin;
pub use signin::SignIn;

mod profile;
pub use profile::Profile;

mod projects;
pub use projects::Projects;
