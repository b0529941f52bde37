//! Open/closed demo.
//!
//! Run with: cargo run --bin open_closed

use anyhow::Result;
use design_patterns::banner;
use design_patterns::open_closed::{
    create_boolean_question, create_multiple_choice_question, create_range_question,
    create_text_question, print_quiz, print_tagged_quiz, sample_quiz, QuestionKind,
    TaggedQuestion,
};
use std::io;

fn main() -> Result<()> {
    design_patterns::init_tracing();
    let mut out = io::stdout().lock();

    banner("Switch On A Type Tag");
    let tagged = vec![
        TaggedQuestion::new(QuestionKind::Boolean, "This video is useful."),
        TaggedQuestion::new(
            QuestionKind::MultipleChoice(vec!["CSS".into(), "HTML".into(), "JS".into(), "Python".into()]),
            "What is your favorite language?",
        ),
        TaggedQuestion::new(QuestionKind::Text, "Describe your favorite JS feature."),
        // Range has no branch in print_tagged_quiz yet.
        TaggedQuestion::new(QuestionKind::Range, "What is the speed limit in your city?"),
    ];
    print_tagged_quiz(&tagged, &mut out)?;

    banner("Questions Render Themselves");
    print_quiz(&sample_quiz(), &mut out)?;

    banner("Functional Approach");
    let questions = vec![
        create_boolean_question("This video is useful."),
        create_multiple_choice_question("What is your favorite language?", &["CSS", "HTML", "JS", "Python"]),
        create_text_question("Describe your favorite JS feature."),
        create_range_question("What is the speed limit in your city?"),
    ];
    print_quiz(&questions, &mut out)?;

    Ok(())
}
