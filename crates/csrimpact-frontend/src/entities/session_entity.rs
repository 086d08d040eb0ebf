use csrimpact_bridge::session::UserRole;

/// Mirror of the backend's persisted session role.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionEntity {
    /// The role stored in the profile, once the backend has answered the
    /// session request.
    pub persisted_role: Option<UserRole>,
    /// Whether the session response has arrived at all.
    pub loaded: bool,
}
