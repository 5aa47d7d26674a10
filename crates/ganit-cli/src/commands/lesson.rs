//! Lesson command handlers

use ganit::lesson::{LessonState, SingleDigit, Slide};
use std::io::Write;

use crate::error::CliError;

fn digit(name: &str, text: &str) -> Result<SingleDigit, CliError> {
    SingleDigit::parse(text).ok_or_else(|| {
        CliError::InvalidInput(format!("{} must be a number from 0 to 9, got {:?}", name, text))
    })
}

fn lesson_for(slide: Slide, first: &str, second: &str) -> Result<LessonState, CliError> {
    let mut lesson = LessonState::default();
    lesson.first = digit("first", first)?;
    lesson.second = digit("second", second)?;
    while lesson.slide != slide && lesson.next() {}
    lesson.find_out();
    Ok(lesson)
}

/// Count two groups of objects
pub fn run_objects(out: &mut impl Write, first: &str, second: &str) -> Result<(), CliError> {
    let lesson = lesson_for(Slide::Objects, first, second)?;
    let groups = lesson.objects();
    let (left, right) = groups.draw('🍎');

    writeln!(out, "📖 {}\n", lesson.slide.title())?;
    writeln!(
        out,
        "If you have {} apples and you get {} more, how many apples do you have now?\n",
        groups.first(),
        groups.second()
    )?;
    writeln!(out, "  {}", left)?;
    writeln!(out, "  +")?;
    writeln!(out, "  {}", right)?;
    writeln!(out, "\n  {}", groups.sentence())?;
    Ok(())
}

/// Hop along the number line
pub fn run_number_line(out: &mut impl Write, first: &str, second: &str) -> Result<(), CliError> {
    let lesson = lesson_for(Slide::NumberLine, first, second)?;
    let line = lesson.number_line();

    writeln!(out, "📖 {}\n", lesson.slide.title())?;
    writeln!(
        out,
        "If you need to add {} and {} using the number line, where will you reach?\n",
        line.first(),
        line.second()
    )?;
    for line_text in line.draw().lines() {
        writeln!(out, "  {}", line_text)?;
    }
    for (n, hop) in line.hops().iter().enumerate() {
        writeln!(out, "  Hop {}: {} → {}", n + 1, hop.from, hop.to)?;
    }
    writeln!(
        out,
        "\n  {} + {} = {}",
        line.first(),
        line.second(),
        line.end()
    )?;
    Ok(())
}
