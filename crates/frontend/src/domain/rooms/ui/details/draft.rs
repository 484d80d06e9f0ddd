//! Ephemeral editing state for adding a user-defined characteristic to a
//! room: closed -> open (typing) -> committed or cancelled -> closed.

use contracts::domain::room::{is_reserved_type, Characteristic, CharacteristicValue};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftValueKind {
    #[default]
    Boolean,
    Number,
    Text,
}

impl DraftValueKind {
    /// Wire/DOM value of the kind selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftValueKind::Boolean => "boolean",
            DraftValueKind::Number => "number",
            DraftValueKind::Text => "string",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "number" => DraftValueKind::Number,
            "string" => DraftValueKind::Text,
            _ => DraftValueKind::Boolean,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            DraftValueKind::Boolean => "common.value.type.boolean",
            DraftValueKind::Number => "common.value.type.number",
            DraftValueKind::Text => "common.value.type.string",
        }
    }

    pub fn all() -> [DraftValueKind; 3] {
        [
            DraftValueKind::Boolean,
            DraftValueKind::Number,
            DraftValueKind::Text,
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacteristicDraft {
    pub visible: bool,
    pub type_name: String,
    pub value_kind: DraftValueKind,
    pub raw_value: String,
}

impl CharacteristicDraft {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Discard all draft fields without touching the characteristic list.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// The typed name collides with `SEATS` or a standard equipment type.
    pub fn type_collides_with_reserved(&self) -> bool {
        !self.type_name.is_empty() && is_reserved_type(&self.type_name)
    }

    /// Raw text parsed according to the selected kind. `None` for a numeric
    /// kind whose text is not a finite number.
    pub fn parsed_value(&self) -> Option<CharacteristicValue> {
        match self.value_kind {
            DraftValueKind::Boolean => Some(CharacteristicValue::Bool(
                self.raw_value.to_lowercase() == "true",
            )),
            DraftValueKind::Number => self
                .raw_value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(CharacteristicValue::Number),
            DraftValueKind::Text => Some(CharacteristicValue::Text(self.raw_value.clone())),
        }
    }

    /// Gate for the add control.
    pub fn is_valid(&self) -> bool {
        !self.type_name.is_empty()
            && !is_reserved_type(&self.type_name)
            && !self.raw_value.is_empty()
            && self.parsed_value().is_some()
    }

    /// The normalized characteristic if the draft is valid, resetting the
    /// draft to its closed state. An invalid draft stays open and untouched.
    pub fn commit(&mut self) -> Option<Characteristic> {
        if !self.is_valid() {
            return None;
        }
        let value = self.parsed_value()?;
        let characteristic = Characteristic {
            kind: self.type_name.to_uppercase(),
            value,
        };
        *self = Self::default();
        Some(characteristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::room::{upsert_characteristic, STANDARD_EQUIPMENT};

    fn draft(type_name: &str, kind: DraftValueKind, raw: &str) -> CharacteristicDraft {
        CharacteristicDraft {
            visible: true,
            type_name: type_name.to_string(),
            value_kind: kind,
            raw_value: raw.to_string(),
        }
    }

    #[test]
    fn reserved_types_block_the_draft_in_any_casing() {
        for reserved in STANDARD_EQUIPMENT
            .iter()
            .copied()
            .chain(["SEATS", "Seats", "whiteboard"])
        {
            let d = draft(reserved, DraftValueKind::Boolean, "true");
            assert!(d.type_collides_with_reserved(), "{reserved} not flagged");
            assert!(!d.is_valid());
            assert_eq!(d.clone().commit(), None);
        }
    }

    #[test]
    fn empty_type_or_value_is_invalid_but_not_flagged_reserved() {
        let d = draft("", DraftValueKind::Boolean, "true");
        assert!(!d.type_collides_with_reserved());
        assert!(!d.is_valid());

        assert!(!draft("SPEAKER", DraftValueKind::Text, "").is_valid());
    }

    #[test]
    fn numeric_kind_requires_a_finite_number() {
        assert!(draft("DESKS", DraftValueKind::Number, "12").is_valid());
        assert!(draft("DESKS", DraftValueKind::Number, "12.5").is_valid());
        assert!(!draft("DESKS", DraftValueKind::Number, "twelve").is_valid());
        assert!(!draft("DESKS", DraftValueKind::Number, "NaN").is_valid());
        assert!(!draft("DESKS", DraftValueKind::Number, "inf").is_valid());
    }

    #[test]
    fn commit_normalizes_type_and_parses_value() {
        let mut d = draft("speaker", DraftValueKind::Boolean, "true");
        let committed = d.commit().unwrap();
        assert_eq!(committed, Characteristic::bool("SPEAKER", true));
        // Draft resets to its closed state.
        assert_eq!(d, CharacteristicDraft::default());

        let committed = draft("Desks", DraftValueKind::Number, "12").commit().unwrap();
        assert_eq!(committed, Characteristic::number("DESKS", 12.0));

        let committed = draft("color", DraftValueKind::Text, "blue").commit().unwrap();
        assert_eq!(committed, Characteristic::text("COLOR", "blue"));
    }

    #[test]
    fn boolean_parsing_compares_lowercased_text() {
        let committed = draft("SPEAKER", DraftValueKind::Boolean, "True").commit().unwrap();
        assert_eq!(committed.value, CharacteristicValue::Bool(true));

        let committed = draft("SPEAKER", DraftValueKind::Boolean, "false").commit().unwrap();
        assert_eq!(committed.value, CharacteristicValue::Bool(false));
    }

    #[test]
    fn cancel_resets_without_producing_a_characteristic() {
        let mut d = draft("SPEAKER", DraftValueKind::Text, "stereo");
        d.cancel();
        assert_eq!(d, CharacteristicDraft::default());
        assert!(!d.visible);
    }

    #[test]
    fn committing_the_same_type_twice_keeps_one_entry_last_value_wins() {
        let mut list = Vec::new();

        let first = draft("SPEAKER", DraftValueKind::Boolean, "true").commit().unwrap();
        upsert_characteristic(&mut list, first);

        let second = draft("speaker", DraftValueKind::Text, "stereo").commit().unwrap();
        upsert_characteristic(&mut list, second);

        assert_eq!(list, vec![Characteristic::text("SPEAKER", "stereo")]);
    }
}
