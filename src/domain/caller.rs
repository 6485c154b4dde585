//! Caller identity attached to an authenticated request.

/// Identity of the authenticated caller, resolved by the auth middleware.
///
/// The uid is opaque to this service; it is only used to key the role
/// lookup. This service never creates accounts, so it never mints one.
#[derive(Clone, Debug)]
pub struct CallerIdentity {
    pub uid: String,
}

impl CallerIdentity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self { uid: uid.into() }
    }
}
