/*
 * Responsibility
 * - v1 の handler 識別子と、そのロール要件の宣言
 * - group の既定値 + handler 単位の上書き (routes.rs と 1:1 で対応させる)
 */
use crate::services::auth::{HandlerRef, PolicyTable, Role};

pub const ME_SHOW: HandlerRef = HandlerRef::new("me", "show");

pub const CUSTOMERS_LIST: HandlerRef = HandlerRef::new("customers", "list");
pub const CUSTOMERS_CREATE: HandlerRef = HandlerRef::new("customers", "create");
pub const CUSTOMERS_SHOW: HandlerRef = HandlerRef::new("customers", "show");
pub const CUSTOMERS_DELETE: HandlerRef = HandlerRef::new("customers", "delete");

pub const FEEDBACK_LIST: HandlerRef = HandlerRef::new("feedback", "list");
pub const FEEDBACK_CREATE: HandlerRef = HandlerRef::new("feedback", "create");

pub const BACKUPS_LIST: HandlerRef = HandlerRef::new("backups", "list");
pub const BACKUPS_CREATE: HandlerRef = HandlerRef::new("backups", "create");

pub const SETTINGS_SHOW: HandlerRef = HandlerRef::new("settings", "show");
pub const SETTINGS_UPDATE: HandlerRef = HandlerRef::new("settings", "update");

pub fn table() -> PolicyTable {
    PolicyTable::builder()
        // me: 認証済みなら誰でも (要件なし)
        .group("customers", &[Role::Admin, Role::Cashier])
        .handler(CUSTOMERS_DELETE, &[Role::Admin])
        // feedback: 投稿は誰でも、閲覧は admin のみ
        .handler(FEEDBACK_LIST, &[Role::Admin])
        .group("backups", &[Role::Admin])
        .group("settings", &[Role::Admin])
        .handler(SETTINGS_SHOW, &[Role::Admin, Role::Cashier])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::RoleRequirement;

    #[test]
    fn declared_requirements() {
        let table = table();
        let admin = RoleRequirement::any_of(&[Role::Admin]);
        let staff = RoleRequirement::any_of(&[Role::Admin, Role::Cashier]);

        assert!(table.resolve(&ME_SHOW).is_empty());
        assert!(table.resolve(&FEEDBACK_CREATE).is_empty());

        assert_eq!(table.resolve(&CUSTOMERS_LIST), staff);
        assert_eq!(table.resolve(&CUSTOMERS_CREATE), staff);
        assert_eq!(table.resolve(&CUSTOMERS_SHOW), staff);
        assert_eq!(table.resolve(&CUSTOMERS_DELETE), admin);

        assert_eq!(table.resolve(&FEEDBACK_LIST), admin);
        assert_eq!(table.resolve(&BACKUPS_LIST), admin);
        assert_eq!(table.resolve(&BACKUPS_CREATE), admin);

        assert_eq!(table.resolve(&SETTINGS_SHOW), staff);
        assert_eq!(table.resolve(&SETTINGS_UPDATE), admin);
    }
}
