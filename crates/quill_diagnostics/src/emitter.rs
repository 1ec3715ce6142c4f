//! Emitter - 诊断输出器

use crate::diagnostic::Diagnostic;
use colored::*;
use std::io::{self, Write};

/// 诊断输出器
pub struct Emitter {
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 输出到 stderr
    pub fn emit(&self, diagnostic: &Diagnostic) {
        // stderr 写失败时没有更好的去处
        let _ = self.emit_to(&mut io::stderr().lock(), diagnostic);
    }

    /// 输出到任意 writer
    pub fn emit_to(&self, out: &mut impl Write, diagnostic: &Diagnostic) -> io::Result<()> {
        if self.use_colors {
            self.emit_colored(out, diagnostic)
        } else {
            self.emit_plain(out, diagnostic)
        }
    }

    fn emit_colored(&self, out: &mut impl Write, diagnostic: &Diagnostic) -> io::Result<()> {
        match &diagnostic.code {
            Some(code) => writeln!(
                out,
                "{}{}: {}",
                diagnostic.level.colored_name(),
                format!("[{}]", code).bold(),
                diagnostic.message.bold()
            )?,
            None => writeln!(
                out,
                "{}: {}",
                diagnostic.level.colored_name(),
                diagnostic.message.bold()
            )?,
        }

        for note in &diagnostic.notes {
            writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            )?;
        }

        for suggestion in &diagnostic.suggestions {
            writeln!(
                out,
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", suggestion.message).green()
            )?;
            if let Some(replacement) = &suggestion.replacement {
                writeln!(out, "        try: {}", replacement.green().italic())?;
            }
        }
        Ok(())
    }

    fn emit_plain(&self, out: &mut impl Write, diagnostic: &Diagnostic) -> io::Result<()> {
        match &diagnostic.code {
            Some(code) => writeln!(out, "{}[{}]: {}", diagnostic.level, code, diagnostic.message)?,
            None => writeln!(out, "{}: {}", diagnostic.level, diagnostic.message)?,
        }

        for note in &diagnostic.notes {
            writeln!(out, "  = note: {}", note)?;
        }

        for suggestion in &diagnostic.suggestions {
            writeln!(out, "  = help: {}", suggestion.message)?;
            if let Some(replacement) = &suggestion.replacement {
                writeln!(out, "        try: {}", replacement)?;
            }
        }
        Ok(())
    }
}
