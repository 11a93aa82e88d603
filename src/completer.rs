use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use sigil::Command;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// rustyline helper: completes command tokens at the first word and local
/// paths (resolved against the live session cwd) everywhere else.
pub struct SigilHelper {
    pub cwd: Arc<RwLock<PathBuf>>,
}

impl SigilHelper {
    pub fn new(cwd: Arc<RwLock<PathBuf>>) -> Self {
        Self { cwd }
    }
}

impl Completer for SigilHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        let (start, word) = find_word_start(line_to_cursor);

        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let is_first_word = !line_to_cursor[..start].contains(|c: char| !c.is_whitespace());

        let mut completions = Vec::new();

        if is_first_word {
            for &cmd in Command::ALL {
                let token = cmd.token();
                if token.starts_with(word) {
                    completions.push(Pair {
                        display: token.to_string(),
                        replacement: token.to_string(),
                    });
                }
            }
        } else {
            let cwd = self.cwd.read().unwrap().clone();

            let (dir_path, partial_name) = if let Some(last_slash) = word.rfind('/') {
                let dir = &word[..=last_slash];
                let name = &word[last_slash + 1..];
                (resolve_dir(&cwd, dir.trim_end_matches('/')), name)
            } else {
                (cwd, word)
            };

            for name in list_matching(&dir_path, partial_name) {
                let replacement = if let Some(last_slash) = word.rfind('/') {
                    format!("{}{}", &word[..=last_slash], name)
                } else {
                    name.clone()
                };
                completions.push(Pair {
                    display: name,
                    replacement,
                });
            }
        }

        Ok((start, completions))
    }
}

fn list_matching(dir: &Path, partial: &str) -> Vec<String> {
    let mut names = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if name.starts_with(partial) {
                let is_dir = entry.file_type().is_ok_and(|ft| ft.is_dir());
                names.push(if is_dir { format!("{name}/") } else { name });
            }
        }
    }
    names.sort();
    names
}

fn find_word_start(line: &str) -> (usize, &str) {
    let mut start = line.len();
    for (i, c) in line.char_indices().rev() {
        if c.is_whitespace() {
            break;
        }
        start = i;
    }
    (start, &line[start..])
}

fn resolve_dir(cwd: &Path, path: &str) -> PathBuf {
    if path.is_empty() {
        return PathBuf::from("/");
    }
    let candidate = PathBuf::from(path);
    if candidate.is_absolute() {
        candidate
    } else {
        cwd.join(candidate)
    }
}

impl Hinter for SigilHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for SigilHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Borrowed(hint)
    }
}

impl Validator for SigilHelper {}

impl Helper for SigilHelper {}
