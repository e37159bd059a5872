use axum::Json;
use serde::Serialize;

use crate::domain::user::models::Role;

/// Fixed, non-dynamic list. Deliberately omits `guest`, which is assignable
/// via the role-change operation but not advertised.
pub async fn get_roles() -> Json<RolesResponseBody> {
    Json(RolesResponseBody {
        roles: Role::LISTED.to_vec(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolesResponseBody {
    pub roles: Vec<Role>,
}
