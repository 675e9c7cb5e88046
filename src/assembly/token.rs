//! Assembly tokens
//!
//! Priced, read-only components a user drops into a build's sockets.

use serde::{Deserialize, Serialize};

/// What kind of component a token is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenType {
    Base,
    Element,
    DamageDice,
    Rarity,
    Ability,
}

/// Catalog grouping a token was projected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Weapon,
    Armor,
    Shield,
    Wondrous,
    Essence,
    Dice,
    Enchantment,
    Feature,
    Spell,
}

impl TokenCategory {
    pub fn name(&self) -> &'static str {
        match self {
            TokenCategory::Weapon => "weapon",
            TokenCategory::Armor => "armor",
            TokenCategory::Shield => "shield",
            TokenCategory::Wondrous => "wondrous",
            TokenCategory::Essence => "essence",
            TokenCategory::Dice => "dice",
            TokenCategory::Enchantment => "enchantment",
            TokenCategory::Feature => "feature",
            TokenCategory::Spell => "spell",
        }
    }
}

/// A selectable component with a point cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    #[serde(rename = "type")]
    pub token_type: TokenType,
    pub category: TokenCategory,
    pub name: String,
    pub icon: String,
    pub cost: u32,
}

impl Token {
    pub fn new(
        id: impl Into<String>,
        token_type: TokenType,
        category: TokenCategory,
        name: impl Into<String>,
        icon: impl Into<String>,
        cost: u32,
    ) -> Self {
        Self {
            id: id.into(),
            token_type,
            category,
            name: name.into(),
            icon: icon.into(),
            cost,
        }
    }
}

/// Named slot in a build.
///
/// `Element` is one UI socket backing two slots: element type and damage dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocketType {
    Base,
    Element,
    Rarity,
    Ability,
}

impl SocketType {
    /// Socket a dropped token lands in. Damage dice share the element socket.
    pub fn for_token(token: &Token) -> SocketType {
        match token.token_type {
            TokenType::Base => SocketType::Base,
            TokenType::Element | TokenType::DamageDice => SocketType::Element,
            TokenType::Rarity => SocketType::Rarity,
            TokenType::Ability => SocketType::Ability,
        }
    }
}

/// Display language for names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    /// Parse a locale code; anything other than Hebrew is English
    pub fn parse(code: &str) -> Locale {
        if code.trim().eq_ignore_ascii_case("he") {
            Locale::He
        } else {
            Locale::En
        }
    }

    pub fn is_hebrew(&self) -> bool {
        matches!(self, Locale::He)
    }

    /// Pick the localized or canonical variant of a name
    pub fn pick<'a>(&self, hebrew: &'a str, english: &'a str) -> &'a str {
        match self {
            Locale::He => hebrew,
            Locale::En => english,
        }
    }
}
