/// Navigation targets requested by the auth flow and the route guard.
///
/// The router in the app crate maps these onto its own route type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    SignIn,
    Home,
    Profile,
    Projects,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Destination::SignIn => "/signin",
            Destination::Home => "/",
            Destination::Profile => "/profile",
            Destination::Projects => "/projects",
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}
