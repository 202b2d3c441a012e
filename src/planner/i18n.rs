//! Planner labels in the supported languages

use super::record::Field;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Language {
    #[default]
    #[strum(to_string = "English")]
    En,
    #[strum(to_string = "Español")]
    Es,
}

impl Language {
    /// The next language in the switcher, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Language::En => "Smart Student Planner",
            Language::Es => "Planificador Estudiantil",
        }
    }

    pub fn field_label(self, field: Field) -> &'static str {
        match (self, field) {
            (Language::En, Field::StudyHours) => "Study Hours",
            (Language::En, Field::TasksDue) => "Tasks Due",
            (Language::En, Field::NextExam) => "Next Exam",
            (Language::Es, Field::StudyHours) => "Horas de estudio",
            (Language::Es, Field::TasksDue) => "Tareas pendientes",
            (Language::Es, Field::NextExam) => "Próximo examen",
        }
    }

    /// Shown for a field the stored record does not carry.
    pub fn not_set(self) -> &'static str {
        match self {
            Language::En => "not set",
            Language::Es => "sin definir",
        }
    }
}
