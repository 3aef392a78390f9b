/// Backend endpoints the client calls, as path segments below the host root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Login,
    Logout,
    Clients,
    Client(&'a str),
    SelfProfile,
}

impl<'a> Endpoint<'a> {
    #[must_use]
    pub fn segments(&self) -> Vec<&'a str> {
        match *self {
            Self::Login => vec!["login"],
            Self::Logout => vec!["access", "logout"],
            Self::Clients => vec!["clients"],
            Self::Client(id) => vec!["clients", id],
            Self::SelfProfile => vec!["self"],
        }
    }
}
