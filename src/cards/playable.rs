//! The `Playable` capability.
//!
//! Playing a card prints one fixed line built from the card's own fields.
//! The line goes to a caller-supplied writer so the console, a log file
//! or a test buffer can receive it.

use std::io::{self, Write};

use super::definition::{Card, Creature, Item, Spell};

/// Something that announces itself when played.
pub trait Playable {
    /// The line printed when the card is played.
    fn announcement(&self) -> String;

    /// Write the announcement as a single line.
    ///
    /// Writer failures are the only error.
    fn play(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.announcement())
    }
}

impl Playable for Creature {
    fn announcement(&self) -> String {
        format!(
            "{} выходит на поле боя! ({}/{})",
            self.name(),
            self.attack(),
            self.health()
        )
    }
}

impl Playable for Spell {
    fn announcement(&self) -> String {
        format!("Применено заклинание '{}'! Эффект: {}", self.name(), self.effect())
    }
}

impl Playable for Item {
    fn announcement(&self) -> String {
        format!("Использован предмет '{}'! Бонус: {}", self.name(), self.bonus())
    }
}

impl Playable for Card {
    fn announcement(&self) -> String {
        match self {
            Card::Creature(c) => c.announcement(),
            Card::Spell(s) => s.announcement(),
            Card::Item(i) => i.announcement(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_announcement() {
        let card = Card::creature("Дракон", 5, 8, 8);
        assert_eq!(card.announcement(), "Дракон выходит на поле боя! (8/8)");
    }

    #[test]
    fn test_spell_announcement() {
        let card = Card::spell("Огненный шар", 3, "наносит 5 урона");
        assert_eq!(
            card.announcement(),
            "Применено заклинание 'Огненный шар'! Эффект: наносит 5 урона"
        );
    }

    #[test]
    fn test_item_announcement() {
        let card = Card::item("Меч героя", 2, "+3 к атаке");
        assert_eq!(
            card.announcement(),
            "Использован предмет 'Меч героя'! Бонус: +3 к атаке"
        );
    }

    #[test]
    fn test_play_writes_one_line() {
        let mut out: Vec<u8> = Vec::new();
        Card::creature("Эльф", 2, 2, 3).play(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Эльф выходит на поле боя! (2/3)\n");
    }
}
