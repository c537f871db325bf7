use std::io::{self, BufRead, Write};

/// Line-based field input for the interactive form.
///
/// Every `ask*` method returns `Ok(None)` once input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for a value; a blank answer takes `default` when there is one.
    pub fn ask(&mut self, label: &str, default: Option<&str>) -> io::Result<Option<String>> {
        match default {
            Some(value) if !value.is_empty() => write!(self.output, "{label} [{value}]: ")?,
            _ => write!(self.output, "{label}: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.trim().is_empty() {
            if let Some(value) = default {
                return Ok(Some(value.to_string()));
            }
        }
        Ok(Some(answer.to_string()))
    }

    /// Like [`Prompter::ask`], but repeats the question until the answer is non-blank.
    pub fn ask_required(
        &mut self,
        label: &str,
        default: Option<&str>,
    ) -> io::Result<Option<String>> {
        loop {
            match self.ask(label, default)? {
                None => return Ok(None),
                Some(answer) if answer.trim().is_empty() => {
                    writeln!(self.output, "{label} is required.")?;
                }
                Some(answer) => return Ok(Some(answer)),
            }
        }
    }

    /// Yes/no question, defaulting to no.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N]"), None)?;
        Ok(matches!(
            answer.as_deref().map(str::trim),
            Some("y" | "Y" | "yes" | "Yes")
        ))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::Prompter;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn answer_is_returned_without_newline() {
        let mut p = prompter("https://youtu.be/abc\r\n");
        assert_eq!(
            p.ask("Source URL", None).unwrap().as_deref(),
            Some("https://youtu.be/abc")
        );
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Source URL: ");
    }

    #[test]
    fn blank_answer_takes_default() {
        let mut p = prompter("\n");
        assert_eq!(
            p.ask("Source URL", Some("https://a")).unwrap().as_deref(),
            Some("https://a")
        );
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out, "Source URL [https://a]: ");
    }

    #[test]
    fn required_field_is_asked_again() {
        let mut p = prompter("\n   \nhttps://a\n");
        assert_eq!(
            p.ask_required("Source URL", None).unwrap().as_deref(),
            Some("https://a")
        );
        let out = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(out.matches("Source URL is required.").count(), 2);
    }

    #[test]
    fn end_of_input_is_none() {
        let mut p = prompter("");
        assert_eq!(p.ask_required("Source URL", None).unwrap(), None);
    }

    #[test]
    fn confirm_defaults_to_no() {
        assert!(prompter("y\n").confirm("Again?").unwrap());
        assert!(!prompter("\n").confirm("Again?").unwrap());
        assert!(!prompter("").confirm("Again?").unwrap());
    }
}
