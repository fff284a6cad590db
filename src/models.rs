//! Frontend Models
//!
//! Data structures matching backend JSON, plus the role/capability model and
//! client-side form validation.

use serde::{Deserialize, Serialize};

/// Portfolio item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// At most two marketplace links per item
    #[serde(default)]
    pub marketplace_links: Vec<MarketplaceLink>,
    pub display_order: i32,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Labeled external link (marketplace listing, social profile)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketplaceLink {
    pub label: String,
    pub url: String,
}

/// Category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub display_order: i32,
}

/// Lightweight category entry for form selects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOption {
    pub id: u32,
    pub name: String,
}

/// Aggregated author view, computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub item_count: u32,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Authenticated user (matches backend session payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: u32,
    pub username: String,
    pub role: Role,
}

/// Closed role enumeration.
///
/// The backend stores roles as open strings; everything the client does not
/// recognize degrades to `Guest`. "superadmin" is folded into `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Creator,
    Guest,
}

/// What a role is allowed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Add/edit/delete catalog items and categories
    ManageCatalog,
    /// Edit site-wide settings
    ManageSettings,
    /// Run the NFT import flow
    ImportNfts,
    /// Manage one's own items via the creator dashboard
    ManageOwnItems,
}

impl Role {
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "admin" | "superadmin" => Role::Admin,
            "creator" => Role::Creator,
            _ => Role::Guest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Creator => "creator",
            Role::Guest => "guest",
        }
    }

    /// Single capability check; all role gating goes through here
    pub fn can(&self, capability: Capability) -> bool {
        match (self, capability) {
            (Role::Admin, _) => true,
            (Role::Creator, Capability::ManageOwnItems) => true,
            _ => false,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::parse(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// Site-wide settings (matches backend)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub site_title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about_text: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub social_links: Vec<MarketplaceLink>,
}

/// NFT from the connected Tezos wallet (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TezosNft {
    pub token_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub artifact_uri: String,
    #[serde(default)]
    pub collection: String,
    /// Already present in the catalog
    #[serde(default)]
    pub imported: bool,
}

/// Public share-link payload (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareView {
    pub item: PortfolioItem,
    pub share_code: String,
    #[serde(default)]
    pub site_title: String,
}

/// One entry of the batch reorder write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    pub id: u32,
    pub display_order: i32,
}

/// Contact form payload
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Creator profile payload for `POST /api/creator/profile`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorProfile {
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: String,
}

/// Editable item fields, as staged by the admin/creator item form
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub marketplace_links: Vec<MarketplaceLink>,
}

// ========================
// Form Validation
// ========================
//
// Validation failures never reach the network; callers surface the message
// next to the form and skip the request.

pub fn validate_login(username: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username is required".to_string());
    }
    if password.is_empty() {
        return Err("Password is required".to_string());
    }
    Ok(())
}

pub fn validate_contact(msg: &ContactMessage) -> Result<(), String> {
    if msg.name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if !is_plausible_email(&msg.email) {
        return Err("A valid email address is required".to_string());
    }
    if msg.message.trim().is_empty() {
        return Err("Message is required".to_string());
    }
    Ok(())
}

pub fn validate_item(draft: &ItemDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if !draft.image_url.starts_with("http://") && !draft.image_url.starts_with("https://") {
        return Err("Image URL must be an http(s) URL".to_string());
    }
    if draft.category.trim().is_empty() {
        return Err("Category is required".to_string());
    }
    if draft.author.trim().is_empty() {
        return Err("Author is required".to_string());
    }
    if draft.marketplace_links.len() > 2 {
        return Err("At most two marketplace links are allowed".to_string());
    }
    Ok(())
}

pub fn validate_category(name: &str, existing: &[Category]) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Category name is required".to_string());
    }
    if existing.iter().any(|c| c.name.eq_ignore_ascii_case(trimmed)) {
        return Err(format!("Category \"{}\" already exists", trimmed));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known_values() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Admin"), Role::Admin);
        assert_eq!(Role::parse("superadmin"), Role::Admin);
        assert_eq!(Role::parse("creator"), Role::Creator);
        assert_eq!(Role::parse("guest"), Role::Guest);
    }

    #[test]
    fn test_role_parse_unknown_degrades_to_guest() {
        assert_eq!(Role::parse("moderator"), Role::Guest);
        assert_eq!(Role::parse(""), Role::Guest);
    }

    #[test]
    fn test_role_capabilities() {
        assert!(Role::Admin.can(Capability::ManageCatalog));
        assert!(Role::Admin.can(Capability::ManageSettings));
        assert!(Role::Admin.can(Capability::ImportNfts));
        assert!(Role::Admin.can(Capability::ManageOwnItems));

        assert!(Role::Creator.can(Capability::ManageOwnItems));
        assert!(!Role::Creator.can(Capability::ManageCatalog));
        assert!(!Role::Creator.can(Capability::ImportNfts));

        assert!(!Role::Guest.can(Capability::ManageOwnItems));
        assert!(!Role::Guest.can(Capability::ManageCatalog));
    }

    #[test]
    fn test_role_roundtrips_through_json() {
        let user: AuthUser =
            serde_json::from_str(r#"{"id":1,"username":"ana","role":"creator"}"#).expect("deserialize user");
        assert_eq!(user.role, Role::Creator);

        let unknown: AuthUser =
            serde_json::from_str(r#"{"id":2,"username":"bo","role":"wizard"}"#).expect("deserialize user");
        assert_eq!(unknown.role, Role::Guest);
    }

    #[test]
    fn test_order_update_serializes_camel_case() {
        let entry = OrderUpdate { id: 7, display_order: 3 };
        let json = serde_json::to_string(&entry).expect("serialize");
        assert_eq!(json, r#"{"id":7,"displayOrder":3}"#);
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("ana", "secret").is_ok());
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("ana", "").is_err());
    }

    #[test]
    fn test_validate_contact_rejects_bad_email() {
        let mut msg = ContactMessage {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hello".to_string(),
        };
        assert!(validate_contact(&msg).is_ok());

        msg.email = "not-an-email".to_string();
        assert!(validate_contact(&msg).is_err());
        msg.email = "a@b".to_string();
        assert!(validate_contact(&msg).is_err());
    }

    #[test]
    fn test_validate_item() {
        let mut draft = ItemDraft {
            title: "Dusk".to_string(),
            image_url: "https://img.example/dusk.png".to_string(),
            category: "paintings".to_string(),
            author: "ana".to_string(),
            ..Default::default()
        };
        assert!(validate_item(&draft).is_ok());

        draft.image_url = "ftp://img.example/dusk.png".to_string();
        assert!(validate_item(&draft).is_err());

        draft.image_url = "https://img.example/dusk.png".to_string();
        draft.marketplace_links = vec![
            MarketplaceLink { label: "a".to_string(), url: "https://a".to_string() },
            MarketplaceLink { label: "b".to_string(), url: "https://b".to_string() },
            MarketplaceLink { label: "c".to_string(), url: "https://c".to_string() },
        ];
        assert!(validate_item(&draft).is_err());
    }

    #[test]
    fn test_validate_category_uniqueness() {
        let existing = vec![Category {
            id: 1,
            name: "Paintings".to_string(),
            description: String::new(),
            display_order: 0,
        }];
        assert!(validate_category("Sculpture", &existing).is_ok());
        assert!(validate_category("paintings", &existing).is_err());
        assert!(validate_category("  ", &existing).is_err());
    }
}
