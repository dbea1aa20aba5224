//! Fighter form state shared by the create and edit pages.
//!
//! [`FighterForm`] is an immutable value: every [`FormEdit`] produces a new
//! form, and the last edit to a field wins.

use roster_core::{
    Fighter, FighterClass, FighterPatch, NewFighter, Stat, StatKind, StatLine, ValidationError,
};

/// Which page owns the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Picking a class loads that class's stat preset.
    Create,
    /// Picking a class changes only the class.
    Edit,
}

/// A single field-level change.
#[derive(Clone, Debug, PartialEq)]
pub enum FormEdit {
    Name(String),
    Class(FighterClass),
    Stat(StatKind, Stat),
    /// Relative change, saturating at the stat bounds.
    AdjustStat(StatKind, i64),
    Description(String),
}

/// Focusable form fields, in tab order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum FormField {
    Name,
    Class,
    Strength,
    Speed,
    Magic,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Class,
        FormField::Strength,
        FormField::Speed,
        FormField::Magic,
        FormField::Description,
    ];

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Stat axis edited by this field, if it is a stat field.
    pub fn stat_kind(self) -> Option<StatKind> {
        match self {
            FormField::Strength => Some(StatKind::Strength),
            FormField::Speed => Some(StatKind::Speed),
            FormField::Magic => Some(StatKind::Magic),
            FormField::Name | FormField::Class | FormField::Description => None,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, FormField::Name | FormField::Description)
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterForm {
    mode: FormMode,
    name: String,
    class: FighterClass,
    stats: StatLine,
    description: String,
}

impl FighterForm {
    /// Blank create form: empty name, Warrior, 5/5/5.
    pub fn create() -> Self {
        Self::from_new(FormMode::Create, NewFighter::default())
    }

    /// Edit form seeded from a stored fighter.
    pub fn edit(fighter: &Fighter) -> Self {
        Self::from_new(FormMode::Edit, fighter.to_new())
    }

    fn from_new(mode: FormMode, fighter: NewFighter) -> Self {
        Self {
            mode,
            name: fighter.name,
            class: fighter.class,
            stats: fighter.stats,
            description: fighter.description,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &FighterClass {
        &self.class
    }

    pub fn stats(&self) -> StatLine {
        self.stats
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn apply(mut self, edit: FormEdit) -> Self {
        match edit {
            FormEdit::Name(name) => self.name = name,
            FormEdit::Class(class) => {
                if self.mode == FormMode::Create {
                    if let Some(preset) = class.preset() {
                        self.stats = preset;
                    }
                }
                self.class = class;
            }
            FormEdit::Stat(kind, stat) => self.stats = self.stats.with(kind, stat),
            FormEdit::AdjustStat(kind, delta) => {
                let adjusted = self.stats.get(kind).saturating_add(delta);
                self.stats = self.stats.with(kind, adjusted);
            }
            FormEdit::Description(description) => self.description = description,
        }
        self
    }

    /// Whether an adjustment by `delta` would change the stat.
    pub fn can_adjust(&self, kind: StatKind, delta: i64) -> bool {
        let stat = self.stats.get(kind);
        match delta.signum() {
            1 => !stat.is_max(),
            -1 => !stat.is_min(),
            _ => false,
        }
    }

    /// Form contents as creation input, before normalisation.
    pub fn to_new(&self) -> NewFighter {
        NewFighter::new(self.name.clone())
            .with_class(self.class.clone())
            .with_stats(self.stats)
            .with_description(self.description.clone())
    }

    /// Full patch overwriting every field with the form contents.
    pub fn to_patch(&self) -> FighterPatch {
        FighterPatch::replace_all(&self.to_new())
    }

    /// Checks the form the same way the store will.
    pub fn validate(&self) -> Result<NewFighter, ValidationError> {
        self.to_new().normalized()
    }
}

impl Default for FighterForm {
    fn default() -> Self {
        Self::create()
    }
}
