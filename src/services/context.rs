use uuid::Uuid;

/// Identity of the authenticated caller, extracted from the verified
/// bearer token. Every service call is scoped by `user_id`.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub user_id: Uuid,
    pub email: Option<String>,
}
