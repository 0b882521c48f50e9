//! Card variants: creatures, spells and items.
//!
//! Every card carries a name and a mana cost. The three variants add
//! their own fields and differ in the line they print when played.
//! Fields are fixed at construction; only getters are exposed.

use serde::{Deserialize, Serialize};

/// Variant tag of a card, for logging and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Creature,
    Spell,
    Item,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CardKind::Creature => "creature",
            CardKind::Spell => "spell",
            CardKind::Item => "item",
        };
        f.write_str(label)
    }
}

/// A creature card with attack and health.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    name: String,
    mana_cost: u32,
    attack: u32,
    health: u32,
}

impl Creature {
    #[must_use]
    pub fn new(name: impl Into<String>, mana_cost: u32, attack: u32, health: u32) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            attack,
            health,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    #[must_use]
    pub const fn attack(&self) -> u32 {
        self.attack
    }

    #[must_use]
    pub const fn health(&self) -> u32 {
        self.health
    }
}

/// A spell card with a one-line effect description.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spell {
    name: String,
    mana_cost: u32,
    effect: String,
}

impl Spell {
    #[must_use]
    pub fn new(name: impl Into<String>, mana_cost: u32, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            effect: effect.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    #[must_use]
    pub fn effect(&self) -> &str {
        &self.effect
    }
}

/// An item card granting a bonus.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    mana_cost: u32,
    bonus: String,
}

impl Item {
    #[must_use]
    pub fn new(name: impl Into<String>, mana_cost: u32, bonus: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mana_cost,
            bonus: bonus.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn mana_cost(&self) -> u32 {
        self.mana_cost
    }

    #[must_use]
    pub fn bonus(&self) -> &str {
        &self.bonus
    }
}

/// Any card that can sit in the deck or the discard pile.
///
/// ## Example
///
/// ```
/// use card_sim::cards::{Card, CardKind};
///
/// let elf = Card::creature("Эльф", 2, 2, 3);
///
/// assert_eq!(elf.kind(), CardKind::Creature);
/// assert_eq!(elf.to_string(), "Эльф (стоимость маны: 2)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    Creature(Creature),
    Spell(Spell),
    Item(Item),
}

impl Card {
    /// Create a creature card.
    #[must_use]
    pub fn creature(name: impl Into<String>, mana_cost: u32, attack: u32, health: u32) -> Self {
        Card::Creature(Creature::new(name, mana_cost, attack, health))
    }

    /// Create a spell card.
    #[must_use]
    pub fn spell(name: impl Into<String>, mana_cost: u32, effect: impl Into<String>) -> Self {
        Card::Spell(Spell::new(name, mana_cost, effect))
    }

    /// Create an item card.
    #[must_use]
    pub fn item(name: impl Into<String>, mana_cost: u32, bonus: impl Into<String>) -> Self {
        Card::Item(Item::new(name, mana_cost, bonus))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Creature(c) => c.name(),
            Card::Spell(s) => s.name(),
            Card::Item(i) => i.name(),
        }
    }

    /// Mana cost. Displayed only; nothing spends mana.
    #[must_use]
    pub fn mana_cost(&self) -> u32 {
        match self {
            Card::Creature(c) => c.mana_cost(),
            Card::Spell(s) => s.mana_cost(),
            Card::Item(i) => i.mana_cost(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Creature(_) => CardKind::Creature,
            Card::Spell(_) => CardKind::Spell,
            Card::Item(_) => CardKind::Item,
        }
    }
}

impl From<Creature> for Card {
    fn from(creature: Creature) -> Self {
        Card::Creature(creature)
    }
}

impl From<Spell> for Card {
    fn from(spell: Spell) -> Self {
        Card::Spell(spell)
    }
}

impl From<Item> for Card {
    fn from(item: Item) -> Self {
        Card::Item(item)
    }
}

/// Listing form used by the discard pile: `Name (стоимость маны: N)`.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (стоимость маны: {})", self.name(), self.mana_cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_fields() {
        let dragon = Creature::new("Дракон", 5, 8, 8);
        assert_eq!(dragon.name(), "Дракон");
        assert_eq!(dragon.mana_cost(), 5);
        assert_eq!(dragon.attack(), 8);
        assert_eq!(dragon.health(), 8);
    }

    #[test]
    fn test_card_shared_accessors() {
        let spell = Card::spell("Огненный шар", 3, "наносит 5 урона");
        let item = Card::item("Меч героя", 2, "+3 к атаке");

        assert_eq!(spell.name(), "Огненный шар");
        assert_eq!(spell.mana_cost(), 3);
        assert_eq!(spell.kind(), CardKind::Spell);

        assert_eq!(item.name(), "Меч героя");
        assert_eq!(item.mana_cost(), 2);
        assert_eq!(item.kind(), CardKind::Item);
    }

    #[test]
    fn test_card_display() {
        let card = Card::creature("Дракон", 5, 8, 8);
        assert_eq!(format!("{}", card), "Дракон (стоимость маны: 5)");

        let card = Card::item("Меч героя", 2, "+3 к атаке");
        assert_eq!(format!("{}", card), "Меч героя (стоимость маны: 2)");
    }

    #[test]
    fn test_from_variant() {
        let card: Card = Spell::new("Огненный шар", 3, "наносит 5 урона").into();
        assert_eq!(card.kind(), CardKind::Spell);
        assert_eq!(CardKind::Spell.to_string(), "spell");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::creature("Эльф", 2, 2, 3);

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"kind\":\"creature\""));

        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
