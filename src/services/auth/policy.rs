/*
 * Responsibility
 * - route handler ごとのロール要件 (RoleRequirement) を静的なテーブルで持つ
 * - 解決順: handler の宣言 → group の既定値 → 要件なし (empty)
 * - 要件と認証済みロールの比較 (evaluate)
 *
 * Notes
 * - テーブルは route 登録時に一度だけ組み立て、リクエスト中は読み取りのみ
 * - Role は enum なので、未知のロールを要件に書くことはできない
 */
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::services::auth::{AuthError, Role};

/// handler の識別子 (`group.handler`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerRef {
    pub group: &'static str,
    pub handler: &'static str,
}

impl HandlerRef {
    pub const fn new(group: &'static str, handler: &'static str) -> Self {
        Self { group, handler }
    }
}

impl fmt::Display for HandlerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.handler)
    }
}

/// 呼び出しを許可するロールの集合。empty は「制限なし」
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRequirement(BTreeSet<Role>);

impl RoleRequirement {
    pub fn any_of(roles: &[Role]) -> Self {
        Self(roles.iter().copied().collect())
    }

    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn allows(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for RoleRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roles: Vec<&str> = self.0.iter().map(Role::as_str).collect();
        write!(f, "{{{}}}", roles.join(", "))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    groups: HashMap<&'static str, RoleRequirement>,
    handlers: HashMap<HandlerRef, RoleRequirement>,
}

impl PolicyTable {
    pub fn builder() -> PolicyTableBuilder {
        PolicyTableBuilder::default()
    }

    /// handler の宣言 → group の既定値 → empty の順に解決する
    pub fn resolve(&self, handler: &HandlerRef) -> RoleRequirement {
        self.handlers
            .get(handler)
            .or_else(|| self.groups.get(handler.group))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct PolicyTableBuilder {
    table: PolicyTable,
}

impl PolicyTableBuilder {
    /// group 内の全 handler に適用される既定の要件
    pub fn group(mut self, group: &'static str, roles: &[Role]) -> Self {
        self.table
            .groups
            .insert(group, RoleRequirement::any_of(roles));
        self
    }

    /// handler 単位の要件。group の既定値より優先される (empty を渡すと制限を外す)
    pub fn handler(mut self, handler: HandlerRef, roles: &[Role]) -> Self {
        self.table
            .handlers
            .insert(handler, RoleRequirement::any_of(roles));
        self
    }

    pub fn build(self) -> PolicyTable {
        self.table
    }
}

/// 認証済みロールを要件と比較する。empty は常に許可
pub fn evaluate(role: Role, requirement: &RoleRequirement) -> Result<(), AuthError> {
    if requirement.is_empty() || requirement.allows(role) {
        return Ok(());
    }

    Err(AuthError::InsufficientRole {
        role,
        required: requirement.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: HandlerRef = HandlerRef::new("customers", "list");
    const DELETE: HandlerRef = HandlerRef::new("customers", "delete");
    const OPEN: HandlerRef = HandlerRef::new("customers", "open");
    const ME: HandlerRef = HandlerRef::new("me", "show");

    fn table() -> PolicyTable {
        PolicyTable::builder()
            .group("customers", &[Role::Admin, Role::Cashier])
            .handler(DELETE, &[Role::Admin])
            .handler(OPEN, &[])
            .build()
    }

    #[test]
    fn handler_requirement_overrides_group() {
        assert_eq!(table().resolve(&DELETE), RoleRequirement::any_of(&[Role::Admin]));
    }

    #[test]
    fn falls_back_to_group_requirement() {
        assert_eq!(
            table().resolve(&LIST),
            RoleRequirement::any_of(&[Role::Cashier, Role::Admin])
        );
    }

    #[test]
    fn empty_handler_declaration_lifts_group_restriction() {
        assert!(table().resolve(&OPEN).is_empty());
    }

    #[test]
    fn no_metadata_resolves_to_unrestricted() {
        assert_eq!(table().resolve(&ME), RoleRequirement::unrestricted());
    }

    #[test]
    fn evaluate_allows_members_and_unrestricted() {
        let admin_or_cashier = RoleRequirement::any_of(&[Role::Admin, Role::Cashier]);

        assert!(evaluate(Role::Admin, &admin_or_cashier).is_ok());
        assert!(evaluate(Role::Cashier, &admin_or_cashier).is_ok());
        assert!(evaluate(Role::Customer, &RoleRequirement::unrestricted()).is_ok());
    }

    #[test]
    fn evaluate_denies_non_members() {
        let admin_only = RoleRequirement::any_of(&[Role::Admin]);

        let err = evaluate(Role::Cashier, &admin_only).unwrap_err();
        assert!(matches!(
            err,
            AuthError::InsufficientRole { role: Role::Cashier, ref required } if *required == admin_only
        ));
        assert_eq!(err.to_string(), "insufficient role: cashier not in {admin}");
    }
}
