//! Hardcoded default catalog
//!
//! Used when no `catalog.ron` is present. Costs follow the power budget
//! point table.

use indexmap::IndexMap;

use super::catalog::{
    AbilityDef, ArmorDef, BaseGroup, Catalog, DiceDef, ElementDef, EnchantmentDef, WeaponDef,
    WondrousDef,
};
use crate::balance::RarityTier;

type Entry<T> = (&'static str, T);

#[allow(clippy::too_many_arguments)]
fn weapon(
    id: &'static str,
    name_he: &str,
    name_en: &str,
    damage: &str,
    damage_type: (&str, &str),
    properties: &[&str],
    range: Option<&str>,
    base_price: f64,
    icon: &str,
) -> Entry<WeaponDef> {
    let def = WeaponDef {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        damage: damage.to_string(),
        damage_type: damage_type.0.to_string(),
        damage_type_he: damage_type.1.to_string(),
        properties: properties.iter().map(|p| p.to_string()).collect(),
        range: range.map(str::to_string),
        base_price,
        icon: icon.to_string(),
        cost: 0,
    };
    (id, def)
}

fn armor(id: &'static str, name_he: &str, name_en: &str, ac: i64, icon: &str) -> Entry<ArmorDef> {
    let def = ArmorDef {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        ac,
        icon: icon.to_string(),
        note: None,
        cost: 0,
    };
    (id, def)
}

fn wondrous(id: &'static str, name_he: &str, name_en: &str, icon: &str) -> Entry<WondrousDef> {
    let def = WondrousDef {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        icon: icon.to_string(),
        cost: 0,
    };
    (id, def)
}

fn group<T>(name_he: &str, name_en: &str, icon: &str, items: Vec<Entry<T>>) -> BaseGroup<T> {
    BaseGroup {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        icon: icon.to_string(),
        items: keyed(items),
    }
}

fn element(
    id: &'static str,
    name_he: &str,
    name_en: &str,
    icon: &str,
    premium: bool,
) -> Entry<ElementDef> {
    let def = ElementDef {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        icon: icon.to_string(),
        // Premium elements cost a point more
        cost: if premium { 1 } else { 0 },
        premium,
    };
    (id, def)
}

fn enchantment(
    id: &'static str,
    name_he: &str,
    name_en: &str,
    bonus: u8,
    rarity: RarityTier,
    icon: &str,
    cost: u32,
) -> Entry<EnchantmentDef> {
    let def = EnchantmentDef {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        bonus,
        rarity,
        icon: icon.to_string(),
        cost,
    };
    (id, def)
}

fn ability(
    id: &'static str,
    name_he: &str,
    name_en: &str,
    icon: &str,
    cost: u32,
    description: &str,
) -> Entry<AbilityDef> {
    let def = AbilityDef {
        name_he: name_he.to_string(),
        name_en: name_en.to_string(),
        icon: icon.to_string(),
        cost,
        description: description.to_string(),
    };
    (id, def)
}

fn keyed<T>(entries: Vec<Entry<T>>) -> IndexMap<String, T> {
    entries.into_iter().map(|(id, v)| (id.to_string(), v)).collect()
}

const SLASHING: (&str, &str) = ("slashing", "חותך");
const PIERCING: (&str, &str) = ("piercing", "דוקר");
const BLUDGEONING: (&str, &str) = ("bludgeoning", "מוחץ");

fn melee_weapons() -> Vec<Entry<WeaponDef>> {
    vec![
        weapon("club", "אלה", "Club", "1d4", BLUDGEONING, &["light"], None, 0.1, "🪵"),
        weapon(
            "dagger",
            "פגיון",
            "Dagger",
            "1d4",
            PIERCING,
            &["finesse", "light", "thrown"],
            Some("20/60"),
            2.0,
            "🗡️",
        ),
        weapon(
            "handaxe",
            "גרזן יד",
            "Handaxe",
            "1d6",
            SLASHING,
            &["light", "thrown"],
            Some("20/60"),
            5.0,
            "🪓",
        ),
        weapon("mace", "מקבת", "Mace", "1d6", BLUDGEONING, &[], None, 5.0, "🔨"),
        weapon(
            "quarterstaff",
            "מטה",
            "Quarterstaff",
            "1d6",
            BLUDGEONING,
            &["versatile"],
            None,
            0.2,
            "🦯",
        ),
        weapon(
            "battleaxe",
            "גרזן קרב",
            "Battleaxe",
            "1d8",
            SLASHING,
            &["versatile"],
            None,
            10.0,
            "🪓",
        ),
        weapon(
            "greataxe",
            "גרזן ענק",
            "Greataxe",
            "1d12",
            SLASHING,
            &["heavy", "two-handed"],
            None,
            30.0,
            "🪓",
        ),
        weapon(
            "greatsword",
            "חרב ענק",
            "Greatsword",
            "2d6",
            SLASHING,
            &["heavy", "two-handed"],
            None,
            50.0,
            "⚔️",
        ),
        weapon(
            "longsword",
            "חרב ארוכה",
            "Longsword",
            "1d8",
            SLASHING,
            &["versatile"],
            None,
            15.0,
            "🗡️",
        ),
        weapon("rapier", "רפייר", "Rapier", "1d8", PIERCING, &["finesse"], None, 25.0, "🤺"),
        weapon(
            "scimitar",
            "חרב מעוקלת",
            "Scimitar",
            "1d6",
            SLASHING,
            &["finesse", "light"],
            None,
            25.0,
            "🗡️",
        ),
        weapon(
            "shortsword",
            "חרב קצרה",
            "Shortsword",
            "1d6",
            PIERCING,
            &["finesse", "light"],
            None,
            10.0,
            "🗡️",
        ),
        weapon(
            "warhammer",
            "פטיש מלחמה",
            "Warhammer",
            "1d8",
            BLUDGEONING,
            &["versatile"],
            None,
            15.0,
            "🔨",
        ),
    ]
}

fn ranged_weapons() -> Vec<Entry<WeaponDef>> {
    vec![
        weapon(
            "lightCrossbow",
            "קשת מוצלבת קלה",
            "Light Crossbow",
            "1d8",
            PIERCING,
            &["loading", "two-handed"],
            Some("80/320"),
            25.0,
            "🏹",
        ),
        weapon(
            "shortbow",
            "קשת קצרה",
            "Shortbow",
            "1d6",
            PIERCING,
            &["two-handed"],
            Some("80/320"),
            25.0,
            "🏹",
        ),
        weapon(
            "longbow",
            "קשת ארוכה",
            "Longbow",
            "1d8",
            PIERCING,
            &["heavy", "two-handed"],
            Some("150/600"),
            50.0,
            "🏹",
        ),
        weapon(
            "heavyCrossbow",
            "קשת מוצלבת כבדה",
            "Heavy Crossbow",
            "1d10",
            PIERCING,
            &["heavy", "loading", "two-handed"],
            Some("100/400"),
            50.0,
            "🏹",
        ),
    ]
}

fn default_weapons() -> IndexMap<String, BaseGroup<WeaponDef>> {
    let melee = group("נשק קרבי", "Melee Weapons", "⚔️", melee_weapons());
    let ranged = group("נשק טווח", "Ranged Weapons", "🏹", ranged_weapons());
    keyed(vec![("melee", melee), ("ranged", ranged)])
}

fn default_armor() -> IndexMap<String, BaseGroup<ArmorDef>> {
    let light = vec![
        armor("padded", "מרופד", "Padded", 11, "🧥"),
        armor("leather", "עור", "Leather", 11, "🧥"),
        armor("studdedLeather", "עור מסומר", "Studded Leather", 12, "🧥"),
    ];
    let medium = vec![
        armor("hide", "עור חיה", "Hide", 12, "🦺"),
        armor("chainShirt", "חולצת שריון", "Chain Shirt", 13, "⛓️"),
        armor("scaleMail", "שריון קשקשים", "Scale Mail", 14, "🐉"),
        armor("breastplate", "שריון חזה", "Breastplate", 14, "🛡️"),
        armor("halfPlate", "חצי-פלטות", "Half Plate", 15, "🛡️"),
    ];
    let heavy = vec![
        armor("ringMail", "שריון טבעות", "Ring Mail", 14, "⭕"),
        armor("chainMail", "שריון שרשרת", "Chain Mail", 16, "⛓️"),
        armor("splint", "שריון רצועות", "Splint", 17, "🛡️"),
        armor("plate", "שריון מלא", "Plate", 18, "🛡️"),
    ];
    let mut shield = armor("shield", "מגן", "Shield", 2, "🛡️");
    shield.1.note = Some("+2 AC".to_string());

    keyed(vec![
        ("light", group("שריון קל", "Light Armor", "🥋", light)),
        ("medium", group("שריון בינוני", "Medium Armor", "🦺", medium)),
        ("heavy", group("שריון כבד", "Heavy Armor", "🛡️", heavy)),
        ("shield", group("מגינים", "Shields", "🛡️", vec![shield])),
    ])
}

fn default_wondrous() -> IndexMap<String, BaseGroup<WondrousDef>> {
    let jewelry = vec![
        wondrous("ring", "טבעת", "Ring", "💍"),
        wondrous("amulet", "קמע", "Amulet", "📿"),
    ];
    let held = vec![
        wondrous("wand", "שרביט", "Wand", "🪄"),
        wondrous("orb", "כדור", "Orb", "🔮"),
    ];
    let worn = vec![
        wondrous("cloak", "גלימה", "Cloak", "🧥"),
        wondrous("boots", "מגפיים", "Boots", "👢"),
        wondrous("gloves", "כפפות", "Gloves", "🧤"),
    ];

    keyed(vec![
        ("jewelry", group("תכשיטים", "Jewelry", "💍", jewelry)),
        ("held", group("חפצים מוחזקים", "Held Items", "🪄", held)),
        ("worn", group("פריטים לבושים", "Worn Items", "👘", worn)),
    ])
}

fn default_elements() -> IndexMap<String, ElementDef> {
    keyed(vec![
        element("fire", "אש", "Fire", "🔥", false),
        element("cold", "קור", "Cold", "❄️", false),
        element("lightning", "ברק", "Lightning", "⚡", false),
        element("acid", "חומצה", "Acid", "🧪", false),
        element("poison", "רעל", "Poison", "☠️", false),
        element("necrotic", "נקרוטי", "Necrotic", "💀", false),
        element("thunder", "רעם", "Thunder", "💥", false),
        element("radiant", "זוהר", "Radiant", "☀️", true),
        element("force", "כוח", "Force", "💫", true),
        element("psychic", "פסיכי", "Psychic", "🧠", true),
    ])
}

fn default_dice() -> IndexMap<String, DiceDef> {
    let dice = |d: &str, cost: u32| DiceDef {
        dice: format!("1{}", d),
        name_he: format!("+1{} נזק", d),
        name_en: format!("+1{} damage", d),
        cost,
    };
    keyed(vec![("d4", dice("d4", 2)), ("d6", dice("d6", 3)), ("d8", dice("d8", 4))])
}

fn default_enchantments() -> IndexMap<String, EnchantmentDef> {
    keyed(vec![
        enchantment(
            "moonTouched",
            "נגיעת ירח (+0)",
            "Moon-Touched (+0)",
            0,
            RarityTier::Common,
            "🌙",
            1,
        ),
        enchantment("plus1", "נשק +1", "+1 Weapon", 1, RarityTier::Uncommon, "✨", 3),
        enchantment("plus2", "נשק +2", "+2 Weapon", 2, RarityTier::Rare, "💫", 6),
        enchantment("plus3", "נשק +3", "+3 Weapon", 3, RarityTier::VeryRare, "⭐", 10),
    ])
}

fn default_abilities() -> IndexMap<String, AbilityDef> {
    keyed(vec![
        ability("returning", "זריקה וחזרה", "Returning", "🔄", 1, "Returns to hand after thrown"),
        ability("light", "מאיר", "Sheds Light", "💡", 1, "Sheds light 20/40 ft"),
        ability("reach", "טווח +5 רגל", "Reach +5 feet", "📏", 2, "Reach increases by 5 feet"),
        ability("push", "דחיפה", "Push 10ft", "💨", 2, "Strength save DC 13/15"),
        ability("vicious", "אכזרי", "Vicious", "💢", 3, "On natural 20, deal +7 damage"),
        ability(
            "warning",
            "אזהרה",
            "Warning",
            "⚠️",
            3,
            "Advantage on initiative, can't be surprised",
        ),
        ability("keen", "דיוק", "Keen", "🎯", 4, "Critical hit on 19-20"),
        ability("prone", "הפלה", "Knock Prone", "⬇️", 4, "Strength save DC 13"),
        ability("frightened", "הפחדה", "Frightened", "😱", 4, "Wisdom save DC 13"),
        ability("stunned", "הלם", "Stunned", "💫", 6, "Constitution save DC 15"),
    ])
}

fn default_spells() -> IndexMap<String, AbilityDef> {
    keyed(vec![
        ability("bless", "ברכה", "Bless", "✝️", 2, "+1d4 to attacks and saves"),
        ability("cureWounds", "ריפוי פצעים", "Cure Wounds", "💚", 2, "Heal 1d8 + modifier"),
        ability("shield", "מגן", "Shield", "🛡️", 2, "+5 AC as reaction"),
        ability("mistyStep", "צעד ערפילי", "Misty Step", "🌫️", 4, "Teleport 30 feet"),
        ability("invisibility", "היעלמות", "Invisibility", "👻", 4, "Become invisible"),
    ])
}

/// Create the default catalog (hardcoded fallback)
pub fn default_catalog() -> Catalog {
    Catalog {
        weapons: default_weapons(),
        armor: default_armor(),
        wondrous: default_wondrous(),
        elements: default_elements(),
        damage_dice: default_dice(),
        enchantments: default_enchantments(),
        abilities: default_abilities(),
        spells: default_spells(),
    }
}
