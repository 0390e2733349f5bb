//! Interactive query console
//!
//! Blocking menu loop over a finished index. Read-only: no command
//! mutates the index. Malformed or out-of-range input prints an error
//! and redisplays the menu; the loop only ends on the exit command (or
//! end of input).
//!
//! @module console

use crate::core::error::Result;
use crate::index::CastIndex;
use crate::output::human;
use crate::scan::CastKind;
use std::io::{BufRead, Write};

const MENU: &str = "\n=== Cast Analyzer Menu ===\n\
                    1. Show summary of all files\n\
                    2. Show detailed analysis for a specific file\n\
                    3. Search by cast type\n\
                    4. Exit\n\
                    Enter your choice (1-4): ";

/// Interactive loop answering summary/detail/search queries
pub struct QueryConsole<'a, R, W> {
    index: &'a CastIndex,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> QueryConsole<'a, R, W> {
    pub fn new(index: &'a CastIndex, input: R, output: W) -> Self {
        Self {
            index,
            input,
            output,
        }
    }

    /// Run until the exit command is selected.
    ///
    /// End of input is treated as exit so a closed stdin cannot spin the
    /// loop.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(choice) = self.read_selection()? else {
                return Ok(());
            };

            match choice {
                Some(1) => self.show_summary()?,
                Some(2) => self.show_file_detail()?,
                Some(3) => self.search_by_kind()?,
                Some(4) => return Ok(()),
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// One selection from the input stream.
    ///
    /// Outer `None` is end of input; inner `None` is a line that does not
    /// parse as a number.
    fn read_selection(&mut self) -> Result<Option<Option<usize>>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().parse().ok()))
    }

    fn show_summary(&mut self) -> Result<()> {
        write!(self.output, "{}", human::format_summary(self.index))?;
        Ok(())
    }

    fn show_file_detail(&mut self) -> Result<()> {
        let paths = self.index.paths();

        writeln!(self.output, "\nAvailable files:")?;
        for (i, path) in paths.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, path)?;
        }
        write!(self.output, "Enter file number: ")?;
        self.output.flush()?;

        let selection = match self.read_selection()? {
            Some(selection) => selection,
            None => return Ok(()),
        };

        let Some(choice) = selection.filter(|&n| n >= 1 && n <= paths.len()) else {
            writeln!(self.output, "Invalid file number.")?;
            return Ok(());
        };

        // paths() order matches the listing above, so the ordinal is stable
        if let Some(report) = self.index.get(paths[choice - 1]) {
            write!(self.output, "{}", human::format_file_detail(report))?;
        }
        Ok(())
    }

    fn search_by_kind(&mut self) -> Result<()> {
        writeln!(self.output, "\nAvailable cast types:")?;
        for (i, kind) in CastKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind)?;
        }
        write!(self.output, "Enter cast type number: ")?;
        self.output.flush()?;

        let selection = match self.read_selection()? {
            Some(selection) => selection,
            None => return Ok(()),
        };

        let Some(choice) = selection.filter(|&n| n >= 1 && n <= CastKind::ALL.len()) else {
            writeln!(self.output, "Invalid cast type.")?;
            return Ok(());
        };

        let kind = CastKind::ALL[choice - 1];
        write!(self.output, "{}", human::format_kind_search(self.index, kind))?;
        Ok(())
    }
}
