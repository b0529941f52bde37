//! Open/closed principle: rendering a quiz.
//!
//! The tagged version has to be edited for every new kind of question; the
//! trait version never changes, new kinds just implement [`Question`].

use std::io::{self, Write};

// =============================================================================
// Milestone 1: Dispatch on a type tag
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    Boolean,
    MultipleChoice(Vec<String>),
    Text,
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedQuestion {
    pub kind: QuestionKind,
    pub description: String,
}

impl TaggedQuestion {
    pub fn new(kind: QuestionKind, description: impl Into<String>) -> Self {
        TaggedQuestion {
            kind,
            description: description.into(),
        }
    }
}

/// `Range` was added after this function was written and prints no choices.
pub fn print_tagged_quiz<W: Write>(questions: &[TaggedQuestion], out: &mut W) -> io::Result<()> {
    for question in questions {
        writeln!(out, "{}", question.description)?;
        match &question.kind {
            QuestionKind::Boolean => {
                writeln!(out, "1. True")?;
                writeln!(out, "2. False")?;
            }
            QuestionKind::MultipleChoice(options) => {
                for (index, option) in options.iter().enumerate() {
                    writeln!(out, "{}. {}", index + 1, option)?;
                }
            }
            QuestionKind::Text => writeln!(out, "Answer: __________")?,
            QuestionKind::Range => {}
        }
    }
    Ok(())
}

// =============================================================================
// Milestone 2: Dispatch through a trait
// =============================================================================

pub trait Question {
    fn description(&self) -> &str;
    fn choices(&self) -> Vec<String>;
}

pub struct BooleanQuestion {
    description: String,
}

impl BooleanQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for BooleanQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        vec!["1. True".into(), "2. False".into()]
    }
}

pub struct MultipleChoiceQuestion {
    description: String,
    options: Vec<String>,
}

impl MultipleChoiceQuestion {
    pub fn new<S: Into<String>>(description: impl Into<String>, options: impl IntoIterator<Item = S>) -> Self {
        Self {
            description: description.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

impl Question for MultipleChoiceQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        self.options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {}", index + 1, option))
            .collect()
    }
}

pub struct TextQuestion {
    description: String,
}

impl TextQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for TextQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        vec!["Answer: __________".into()]
    }
}

pub struct RangeQuestion {
    description: String,
}

impl RangeQuestion {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl Question for RangeQuestion {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        vec!["Minimum: __________".into(), "Maximum: __________".into()]
    }
}

pub fn print_quiz<W: Write>(questions: &[Box<dyn Question>], out: &mut W) -> io::Result<()> {
    for question in questions {
        writeln!(out, "{}", question.description())?;
        for line in question.choices() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

// =============================================================================
// Milestone 3: Questions from closures
// =============================================================================

pub struct QuestionFn<F> {
    description: String,
    choices: F,
}

impl<F: Fn() -> Vec<String>> QuestionFn<F> {
    pub fn new(description: impl Into<String>, choices: F) -> Self {
        Self {
            description: description.into(),
            choices,
        }
    }
}

impl<F: Fn() -> Vec<String>> Question for QuestionFn<F> {
    fn description(&self) -> &str {
        &self.description
    }

    fn choices(&self) -> Vec<String> {
        (self.choices)()
    }
}

pub fn create_boolean_question(description: &str) -> Box<dyn Question> {
    Box::new(QuestionFn::new(description, || {
        vec!["1. True".to_string(), "2. False".to_string()]
    }))
}

pub fn create_multiple_choice_question(description: &str, options: &[&str]) -> Box<dyn Question> {
    let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
    Box::new(QuestionFn::new(description, move || {
        options
            .iter()
            .enumerate()
            .map(|(index, option)| format!("{}. {}", index + 1, option))
            .collect()
    }))
}

pub fn create_text_question(description: &str) -> Box<dyn Question> {
    Box::new(QuestionFn::new(description, || vec!["Answer: __________".to_string()]))
}

pub fn create_range_question(description: &str) -> Box<dyn Question> {
    Box::new(QuestionFn::new(description, || {
        vec!["Minimum: __________".to_string(), "Maximum: __________".to_string()]
    }))
}

pub fn sample_quiz() -> Vec<Box<dyn Question>> {
    vec![
        Box::new(BooleanQuestion::new("This video is useful.")),
        Box::new(MultipleChoiceQuestion::new(
            "What is your favorite language?",
            ["CSS", "HTML", "JS", "Python"],
        )),
        Box::new(TextQuestion::new("Describe your favorite JS feature.")),
        Box::new(RangeQuestion::new("What is the speed limit in your city?")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(questions: &[Box<dyn Question>]) -> String {
        let mut out = Vec::new();
        print_quiz(questions, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_trait_quiz_renders_every_kind() {
        let text = render(&sample_quiz());
        assert!(text.starts_with("This video is useful.\n1. True\n2. False\n\n"));
        assert!(text.contains("4. Python\n"));
        assert!(text.ends_with("What is the speed limit in your city?\nMinimum: __________\nMaximum: __________\n\n"));
    }

    #[test]
    fn test_tagged_quiz_drops_range_choices() {
        let questions = vec![
            TaggedQuestion::new(QuestionKind::Text, "Describe it."),
            TaggedQuestion::new(QuestionKind::Range, "How fast?"),
        ];
        let mut out = Vec::new();
        print_tagged_quiz(&questions, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Describe it.\nAnswer: __________\nHow fast?\n");
    }

    struct RatingQuestion {
        description: String,
        stars: usize,
    }

    impl Question for RatingQuestion {
        fn description(&self) -> &str {
            &self.description
        }

        fn choices(&self) -> Vec<String> {
            vec!["*".repeat(self.stars)]
        }
    }

    #[test]
    fn test_new_kind_needs_no_change_to_print_quiz() {
        let questions: Vec<Box<dyn Question>> = vec![Box::new(RatingQuestion {
            description: "Rate this chapter.".into(),
            stars: 5,
        })];
        assert_eq!(render(&questions), "Rate this chapter.\n*****\n\n");
    }

    #[test]
    fn test_functional_questions_match_structs() {
        let functional = vec![
            create_boolean_question("This video is useful."),
            create_multiple_choice_question("What is your favorite language?", &["CSS", "HTML", "JS", "Python"]),
            create_text_question("Describe your favorite JS feature."),
            create_range_question("What is the speed limit in your city?"),
        ];
        assert_eq!(render(&functional), render(&sample_quiz()));
    }
}
