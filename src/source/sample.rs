//! Built-in sample question set.

use crate::model::{QuestionId, QuestionRecord, QuestionType};

/// `(id, question, answer, type, marks)`.
type SampleRow = (u32, &'static str, &'static str, QuestionType, u32);

const SAMPLE: [SampleRow; 20] = [
    (1, "What is the result of 5 + 3?", "8", QuestionType::Numeric, 1),
    (
        2,
        "Is React a JavaScript library?",
        "Yes, React is a JavaScript library for building user interfaces.",
        QuestionType::TrueFalse,
        1,
    ),
    (
        3,
        "What is JSX?",
        "JSX is a syntax extension for JavaScript that looks similar to HTML.",
        QuestionType::ShortAnswer,
        2,
    ),
    (4, "What is the capital of France?", "Paris", QuestionType::ShortAnswer, 1),
    (5, "Define Newton's Second Law.", "F = ma", QuestionType::LongAnswer, 3),
    (6, "What is 10 * 5?", "50", QuestionType::Numeric, 1),
    (7, "Capital of Germany?", "Berlin", QuestionType::ShortAnswer, 1),
    (8, "Square root of 64?", "8", QuestionType::Numeric, 1),
    (
        9,
        "What are props?",
        "Props are read-only data passed from parent to child.",
        QuestionType::ShortAnswer,
        2,
    ),
    (
        10,
        "What is useEffect?",
        "A hook for side effects in React.",
        QuestionType::ShortAnswer,
        2,
    ),
    (
        11,
        "What is virtual DOM?",
        "A lightweight copy of the real DOM used for performance.",
        QuestionType::LongAnswer,
        3,
    ),
    (
        12,
        "What is state in React?",
        "Data that determines how a component renders and behaves.",
        QuestionType::LongAnswer,
        3,
    ),
    (13, "Capital of Spain?", "Madrid", QuestionType::ShortAnswer, 1),
    (
        14,
        "What is prop drilling?",
        "Passing props through many layers unnecessarily.",
        QuestionType::ShortAnswer,
        2,
    ),
    (15, "What is the capital of Japan?", "Tokyo", QuestionType::ShortAnswer, 1),
    (
        16,
        "What is useState?",
        "Hook to manage state in functional components.",
        QuestionType::ShortAnswer,
        2,
    ),
    (17, "Square root of 100?", "10", QuestionType::Numeric, 1),
    (18, "What is the capital of India?", "New Delhi", QuestionType::ShortAnswer, 1),
    (19, "What is kinetic energy?", "Energy of motion.", QuestionType::ShortAnswer, 2),
    (20, "What is 15 / 3?", "5", QuestionType::Numeric, 1),
];

/// Owner recorded on the first half of the sample set; the rest have none.
const SAMPLE_OWNER: &str = "Admin";

/// The 20 built-in questions, in display order.
pub fn sample_questions() -> Vec<QuestionRecord> {
    SAMPLE
        .iter()
        .filter_map(|&(id, question, answer, kind, marks)| {
            let record = QuestionRecord::new(QuestionId::new(id).ok()?, question, answer)
                .with_type(kind)
                .with_marks(marks);
            Some(if id <= 10 {
                record.with_owner(SAMPLE_OWNER)
            } else {
                record
            })
        })
        .collect()
}
