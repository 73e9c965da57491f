//! Identity Resolution
//!
//! Picks the single name shown for a wallet holder and resolves the avatar
//! image. Name-service lookups themselves belong to
//! [`crate::providers::NameService`]; this module only applies precedence.

use crate::format::truncate_address;
use crate::model::{Leader, Profile};

/// Placeholder in an avatar generator template replaced by the seed
pub const SEED_PLACEHOLDER: &str = "{seed}";

/// Resolve the display name: name-service name, else username, else the
/// truncated address
///
/// Empty or whitespace-only names count as absent.
pub fn resolve_display_name(
    ens_name: Option<&str>,
    username: Option<&str>,
    address: &str,
) -> String {
    fn present(name: Option<&str>) -> Option<&str> {
        name.filter(|n| !n.trim().is_empty())
    }

    present(ens_name)
        .or_else(|| present(username))
        .map(str::to_string)
        .unwrap_or_else(|| truncate_address(address))
}

/// Resolve the avatar image for an address
///
/// A name-service avatar wins. Otherwise the generator template is filled
/// with the custom seed, or the address when no seed was chosen.
pub fn avatar_url(
    ens_avatar: Option<&str>,
    address: &str,
    seed: Option<&str>,
    generator_template: &str,
) -> String {
    if let Some(avatar) = ens_avatar.filter(|a| !a.trim().is_empty()) {
        return avatar.to_string();
    }

    let seed = seed.filter(|s| !s.is_empty()).unwrap_or(address);
    generator_template.replace(SEED_PLACEHOLDER, seed)
}

/// Anything that carries a wallet address and optional names
pub trait DisplayIdentity {
    fn wallet_address(&self) -> &str;
    fn name_service_name(&self) -> Option<&str>;
    fn user_name(&self) -> Option<&str>;

    /// Name shown in headers and table rows
    fn display_name(&self) -> String {
        resolve_display_name(
            self.name_service_name(),
            self.user_name(),
            self.wallet_address(),
        )
    }

    /// Truncated address shown under the name
    fn short_address(&self) -> String {
        truncate_address(self.wallet_address())
    }
}

impl DisplayIdentity for Leader {
    fn wallet_address(&self) -> &str {
        &self.address
    }

    fn name_service_name(&self) -> Option<&str> {
        self.ens_name.as_deref()
    }

    fn user_name(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

impl DisplayIdentity for Profile {
    fn wallet_address(&self) -> &str {
        &self.address
    }

    fn name_service_name(&self) -> Option<&str> {
        self.ens_name.as_deref()
    }

    fn user_name(&self) -> Option<&str> {
        self.username.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1234567890abcdef";

    #[test]
    fn test_ens_name_wins() {
        let name = resolve_display_name(Some("buildmaster.eth"), Some("builder"), ADDRESS);
        assert_eq!(name, "buildmaster.eth");
    }

    #[test]
    fn test_username_when_no_ens() {
        let name = resolve_display_name(None, Some("PublicBuilder"), ADDRESS);
        assert_eq!(name, "PublicBuilder");
    }

    #[test]
    fn test_truncated_address_fallback() {
        assert_eq!(resolve_display_name(None, None, ADDRESS), "0x1234...cdef");
        assert_eq!(resolve_display_name(None, None, "0xabc"), "0xabc");
    }

    #[test]
    fn test_empty_names_are_absent() {
        assert_eq!(resolve_display_name(Some(""), Some("  "), ADDRESS), "0x1234...cdef");
        assert_eq!(resolve_display_name(Some(""), Some("dev"), ADDRESS), "dev");
    }

    #[test]
    fn test_leader_identity() {
        let leader = Leader::new(2, ADDRESS, 2).username("PublicBuilder");
        assert_eq!(leader.display_name(), "PublicBuilder");
        assert_eq!(leader.short_address(), "0x1234...cdef");
    }

    #[test]
    fn test_avatar_url() {
        let template = "https://avatars.example/identicon?seed={seed}";
        assert_eq!(
            avatar_url(Some("ipfs://avatar"), ADDRESS, Some("abc"), template),
            "ipfs://avatar"
        );
        assert_eq!(
            avatar_url(None, ADDRESS, Some("abc"), template),
            "https://avatars.example/identicon?seed=abc"
        );
        assert_eq!(
            avatar_url(None, ADDRESS, None, template),
            format!("https://avatars.example/identicon?seed={}", ADDRESS)
        );
    }
}
