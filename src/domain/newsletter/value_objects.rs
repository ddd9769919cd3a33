//! Newsletter Context - Value Objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 订阅唯一标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 订阅邮箱地址
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: impl Into<String>) -> Result<Self, &'static str> {
        let email = email.into();
        if email.is_empty() {
            return Err("邮箱不能为空");
        }
        if email.len() > 254 {
            return Err("邮箱不能超过254字符");
        }
        if email.chars().any(char::is_whitespace) {
            return Err("邮箱不能包含空白字符");
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
            _ => return Err("邮箱格式无效"),
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(EmailAddress::new("leitor@example.com").is_ok());
        assert!(EmailAddress::new("a.b+tag@news.example.org").is_ok());
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("sem-arroba.com").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("leitor@semdominio").is_err());
        assert!(EmailAddress::new("com espaco@example.com").is_err());
    }
}
