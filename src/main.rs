//! Interactive phone book shell.
//!
//! Menu-driven front end over [PhoneBook]. All logic lives in the library;
//! this binary only prompts, confirms and prints. The store file defaults
//! to `phonebook.txt` and can be given as the first argument. Set
//! `RUST_LOG=debug` to see engine logs.

use log::error;
use phonebook::store::{DEFAULT_STORE_FILE, FileBackend, Store, StoreBuilder};
use phonebook::{PhoneBook, PhonebookError, PhonebookErrorType, Record};
use std::io::{self, BufRead, Write};

const DIVIDER: &str =
    "------------------------------------------------------------------------------------";

/// Column spacing of the listing, matching [Record]'s `Display`
const COLUMN_GAP: &str = "\t\t\t\t";

/// Longer input is treated as no input
const MAX_INPUT_LEN: usize = 250;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());
    let mut shell = Shell {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
        book: PhoneBook::new(),
        store: StoreBuilder::for_file(&path).build(),
        path,
    };

    if let Err(err) = shell.run() {
        error!("Shell terminated: {err}");
        std::process::exit(1);
    }
}

struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
    book: PhoneBook,
    store: Store<FileBackend>,
    path: String,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    fn run(&mut self) -> io::Result<()> {
        loop {
            self.menu()?;
            let Some(selection) = self.prompt("Please select an option\n: ")? else {
                return Ok(());
            };

            match selection.as_str() {
                "1" => self.find()?,
                "2" => self.add()?,
                "3" => self.delete()?,
                "4" => self.change()?,
                "5" => self.display()?,
                "6" => self.clear()?,
                "7" => self.save()?,
                "8" => self.load()?,
                "9" => {
                    writeln!(self.output, "Goodbye")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "\nNot an option, please select a number between 1 and 9\n")?,
            }
        }
    }

    fn menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{DIVIDER}\nPhonebook Program Menu\n{DIVIDER}")?;
        for (number, label) in [
            "Find entry",
            "Add entry",
            "Delete entry",
            "Change entry",
            "Display all entries",
            "Clear all entries",
            "Save phonebook",
            "Load phonebook",
            "Quit",
        ]
        .iter()
        .enumerate()
        {
            writeln!(self.output, "{}. {label}", number + 1)?;
        }
        writeln!(self.output)
    }

    /// Prints `message` and reads one trimmed line; `None` on end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        Ok(Some(if line.len() < MAX_INPUT_LEN { line.to_string() } else { String::new() }))
    }

    /// Case-sensitive: only lowercase affirmatives confirm.
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let answer = self.prompt(message)?.unwrap_or_default();
        Ok(matches!(answer.as_str(), "yes" | "y" | "yee" | "ye"))
    }

    fn names(&mut self) -> io::Result<(String, String)> {
        let first = self.prompt("First name: ")?.unwrap_or_default();
        let last = self.prompt("Last name: ")?.unwrap_or_default();
        Ok((last, first))
    }

    fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output, "{DIVIDER}\n{title}\n{DIVIDER}")
    }

    fn table_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "First{COLUMN_GAP}Last{COLUMN_GAP}Phone Number\n{DIVIDER}")
    }

    fn report(&mut self, result: Result<(), PhonebookError>, success: &str) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(self.output, "\n{success}\n"),
            Err(err) => writeln!(self.output, "\n{err}\n"),
        }
    }

    fn find(&mut self) -> io::Result<()> {
        self.heading("Find entry")?;
        let (last, first) = self.names()?;
        match self.book.find(&last, &first).cloned() {
            Some(record) => {
                writeln!(self.output, "\nRecord found:\n")?;
                self.table_header()?;
                writeln!(self.output, "{record}\n")
            }
            None => writeln!(self.output, "\nEntry not found\n"),
        }
    }

    fn add(&mut self) -> io::Result<()> {
        self.heading("Add entry")?;
        let (last, first) = self.names()?;
        let phone = self.prompt("Phone number: ")?.unwrap_or_default();
        let record = Record::new(&last, &first, &phone);

        writeln!(self.output, "\nConfirm this information looks correct? (y/n)")?;
        self.table_header()?;
        writeln!(self.output, "{record}")?;
        if !self.confirm(": ")? {
            return writeln!(self.output, "\nCancelled\n");
        }

        let result = self.book.insert(record);
        self.report(result, "Added new entry to phonebook")
    }

    fn delete(&mut self) -> io::Result<()> {
        self.heading("Delete entry")?;
        let (last, first) = self.names()?;
        writeln!(self.output, "\nAre you sure you wish to delete this entry? (y/n)\n\t-> {first} {last}")?;
        if !self.confirm(": ")? {
            return writeln!(self.output, "\nCancelled\n");
        }

        let result = self.book.delete(&last, &first).map(|_| ());
        self.report(result, "Successfully deleted")
    }

    fn change(&mut self) -> io::Result<()> {
        self.heading("Change entry")?;
        let (last, first) = self.names()?;
        let phone = self.prompt("New phone number: ")?.unwrap_or_default();
        writeln!(self.output, "\nConfirm this information looks correct? (y/n)\n\t-> {first} {last}\t{phone}")?;
        if !self.confirm(": ")? {
            return writeln!(self.output, "\nCancelled\n");
        }

        let result = self.book.update_phone(&last, &first, &phone).map(|_| ());
        self.report(result, "Success")
    }

    fn display(&mut self) -> io::Result<()> {
        if self.book.is_empty() {
            return writeln!(self.output, "\nNo records\n");
        }

        writeln!(self.output, "\nPhonebook contains {} entries.", self.book.len())?;
        self.table_header()?;
        for record in self.book.ordered_sequence() {
            writeln!(self.output, "{record}")?;
        }
        writeln!(self.output, "{DIVIDER}")
    }

    fn clear(&mut self) -> io::Result<()> {
        self.heading("Clearing phonebook")?;
        if self.confirm("Are you sure you wish to delete the entire phonebook? (y/n)\n: ")? {
            self.book.clear();
            writeln!(self.output, "\nSuccessfully cleared phonebook\n")
        } else {
            writeln!(self.output, "\nCancelled\n")
        }
    }

    fn save(&mut self) -> io::Result<()> {
        self.heading("Save Phonebook")?;
        match self.store.save(&self.book) {
            Ok(0) => writeln!(self.output, "\nSave failed. Ensure the phonebook isn't empty.\n"),
            Ok(_) => writeln!(self.output, "\nSuccessfully saved as {}\n", self.path),
            Err(err) => writeln!(self.output, "\nSave failed: {err}\n"),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        self.heading("Loading phonebook")?;
        if !self.confirm("Are you sure you wish to load a new phonebook? It will clear your current entries. (y/n)\n: ")? {
            return writeln!(self.output, "\nCancelled\n");
        }

        match self.store.load(&mut self.book) {
            Ok(report) => {
                self.display()?;
                writeln!(self.output, "\nSuccessfully loaded phonebook ({} entries)\n", report.loaded)?;
                if report.skipped_duplicates > 0 {
                    writeln!(self.output, "Skipped {} duplicate lines\n", report.skipped_duplicates)?;
                }
                Ok(())
            }
            Err(err) if *err.kind() == PhonebookErrorType::StoreMissing => writeln!(
                self.output,
                "\nNo save file located, please save a phonebook before loading.\n"
            ),
            Err(err) => writeln!(self.output, "\nLoad failed: {err}\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn shell(input: &str, path: &std::path::Path) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        Shell {
            input: Cursor::new(input.as_bytes().to_vec()),
            output: Vec::new(),
            book: PhoneBook::new(),
            store: StoreBuilder::for_file(path).build(),
            path: path.display().to_string(),
        }
    }

    fn output(shell: &Shell<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&shell.output).into_owned()
    }

    #[test]
    fn test_add_display_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell("2\nAnna\nSmith\n111\ny\n5\n9\n", &dir.path().join("book.txt"));
        shell.run().unwrap();

        assert_eq!(shell.book.find("Smith", "Anna").unwrap().phone(), "111");
        let printed = output(&shell);
        assert!(printed.contains("Added new entry to phonebook"));
        assert!(printed.contains("Phonebook contains 1 entries."));
        assert!(printed.contains("ANNA\t\t\t\tSMITH\t\t\t\t111"));
        assert!(printed.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_confirmation_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut shell = shell("2\nAnna\nSmith\n111\nYes\n2\nBob\nJones\n222\nyee\n", &dir.path().join("book.txt"));
        shell.run().unwrap();

        assert!(!shell.book.contains("Smith", "Anna"));
        assert!(shell.book.contains("Jones", "Bob"));
        assert!(output(&shell).contains("Cancelled"));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        let mut shell = shell("2\nAnna\nSmith\n111\ny\n7\n6\ny\n8\ny\n", &path);
        shell.run().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ANNA,SMITH,111\n");
        assert_eq!(shell.book.len(), 1);
        assert!(output(&shell).contains("Successfully loaded phonebook (1 entries)"));
    }
}
