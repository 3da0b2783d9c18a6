//! The single-pass argument scanner.
//!
//! A [`ScanEngine`] owns its tokens and a snapshot of the registry. The first
//! [`ScanEngine::run`] walks the tokens once and memoizes the [`ScanResult`];
//! later calls return the cached value untouched.

use crate::descriptor::{ArgumentType, OptionDescriptor, OptionKind};
use crate::error::ParseError;
use crate::outcome::{ParsedOption, ParsedValue, ScanResult};
use crate::registry::Registry;

/// How the dispatcher classified one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// `-`, or `/` in DOS mode: stop, leave this token in the tail.
    Stop,
    /// `--`: stop, consuming this token.
    Terminator,
    Long { text: &'a str, dos: bool },
    Cluster { text: &'a str, dos: bool },
    /// Not an option; only reaches `remaining` through the cursor.
    Plain,
}

fn classify(token: &str, dos_mode: bool) -> Token<'_> {
    if dos_mode {
        if let Some(rest) = token.strip_prefix('/') {
            if rest.is_empty() {
                return Token::Stop;
            }
            let mut chars = rest.chars();
            chars.next();
            let single = chars.clone().next().is_none();
            let colon_second = chars.next() == Some(':');
            // Two-character names without ':' land here as clusters too.
            if single || colon_second || !rest.contains(':') {
                return Token::Cluster {
                    text: rest,
                    dos: true,
                };
            }
            return Token::Long {
                text: rest,
                dos: true,
            };
        }
    }

    match token {
        "-" => Token::Stop,
        "--" => Token::Terminator,
        _ => {
            if let Some(text) = token.strip_prefix("--") {
                Token::Long { text, dos: false }
            } else if let Some(text) = token.strip_prefix('-') {
                Token::Cluster { text, dos: false }
            } else {
                Token::Plain
            }
        }
    }
}

/// Split `name=value` (`name:value` in DOS mode) at the first separator.
/// A bare trailing separator yields no inline argument.
fn split_inline(text: &str, dos: bool) -> (&str, Option<&str>) {
    let separator = if dos { ':' } else { '=' };
    match text.split_once(separator) {
        Some((name, argument)) if !argument.is_empty() => (name, Some(argument)),
        Some((name, _)) => (name, None),
        None => (text, None),
    }
}

/// Mutable bookkeeping for the one pass over the tokens.
struct Pass<'a> {
    registry: &'a Registry,
    tokens: &'a [String],
    /// Tokens consumed so far.
    cursor: usize,
    /// Upcoming tokens already claimed as option arguments.
    pending_skip: usize,
}

impl<'a> Pass<'a> {
    fn new(registry: &'a Registry, tokens: &'a [String]) -> Self {
        Pass {
            registry,
            tokens,
            cursor: 0,
            pending_skip: 0,
        }
    }

    fn scan(mut self, dos_mode: bool) -> ScanResult {
        let tokens = self.tokens;
        let mut outcomes = Vec::new();

        for (position, raw) in tokens.iter().enumerate() {
            let token = raw.trim();
            if token.is_empty() {
                self.cursor += 1;
                continue;
            }
            if self.pending_skip > 0 {
                log::trace!("token {} taken as an option argument", position);
                self.pending_skip -= 1;
                self.cursor += 1;
                continue;
            }

            let class = classify(token, dos_mode);
            log::trace!("token {} {:?} classified as {:?}", position, token, class);
            match class {
                Token::Stop => {
                    log::debug!("scan stopped at token {}", position);
                    break;
                }
                Token::Terminator => {
                    self.cursor += 1;
                    log::debug!("scan terminated by \"--\" at token {}", position);
                    break;
                }
                Token::Long { text, dos } => {
                    outcomes.push(self.resolve_long(text, dos));
                }
                Token::Cluster { text, dos } => {
                    outcomes.extend(self.resolve_cluster(text, dos));
                }
                Token::Plain => {}
            }
        }

        let remaining = tokens[self.cursor..].to_vec();
        log::debug!(
            "scan complete: {} outcome(s), {} remaining token(s)",
            outcomes.len(),
            remaining.len()
        );
        ScanResult {
            outcomes,
            remaining,
        }
    }

    /// Claim the token after the cursor as an option argument.
    ///
    /// Plain tokens never move the cursor, so after one this is not the
    /// token following the option.
    fn take_next(&mut self) -> Option<String> {
        let next = self.tokens.get(self.cursor + 1)?.clone();
        self.pending_skip += 1;
        Some(next)
    }

    /// Check an occurrence against its descriptor and build the outcome.
    fn bind(
        &mut self,
        descriptor: &OptionDescriptor,
        inline: Option<&str>,
    ) -> ParsedOption {
        let argument = match (descriptor.arg_type(), inline) {
            (ArgumentType::None, Some(argument)) => {
                return ParseError::Extraneous {
                    name: descriptor.name().to_string(),
                    kind: descriptor.kind(),
                    argument: argument.to_string(),
                }
                .into();
            }
            (ArgumentType::None, None) => None,
            (ArgumentType::Required, Some(argument)) => Some(argument.to_string()),
            (ArgumentType::Required, None) => match self.take_next() {
                Some(next) => Some(next),
                None => {
                    return ParseError::Missing {
                        name: descriptor.name().to_string(),
                        kind: descriptor.kind(),
                    }
                    .into();
                }
            },
        };
        ParsedValue {
            name: descriptor.name().to_string(),
            kind: descriptor.kind(),
            argument_type: descriptor.arg_type(),
            argument,
        }
        .into()
    }

    fn resolve_long(&mut self, text: &str, dos: bool) -> ParsedOption {
        let (name, inline) = split_inline(text, dos);
        let registry = self.registry;
        let outcome = match registry.long(name) {
            Some(descriptor) => self.bind(descriptor, inline),
            None => ParseError::Unknown {
                name: name.to_string(),
                kind: OptionKind::Long,
            }
            .into(),
        };
        self.cursor += 1;
        outcome
    }

    fn resolve_cluster(&mut self, cluster: &str, dos: bool) -> Vec<ParsedOption> {
        let registry = self.registry;
        let mut outcomes = Vec::new();
        // Characters of this cluster already claimed as an inline argument.
        let mut local_skip = 0usize;

        for (offset, flag) in cluster.char_indices() {
            if local_skip > 0 {
                local_skip -= 1;
                continue;
            }

            let mut trailing = &cluster[offset + flag.len_utf8()..];
            if dos {
                if let Some(rest) = trailing.strip_prefix(':') {
                    trailing = rest;
                    local_skip += 1;
                }
            }
            // Whatever follows a flag is its argument, never more flags.
            local_skip += trailing.chars().count();
            let inline = (!trailing.is_empty()).then_some(trailing);

            let outcome = match registry.short(flag) {
                Some(descriptor) => self.bind(descriptor, inline),
                None => ParseError::Unknown {
                    name: flag.to_string(),
                    kind: OptionKind::Short,
                }
                .into(),
            };
            outcomes.push(outcome);
        }

        self.cursor += 1;
        outcomes
    }
}

/// One scan over a fixed token sequence.
#[derive(Debug, Clone)]
pub struct ScanEngine {
    registry: Registry,
    tokens: Vec<String>,
    dos_mode: bool,
    result: Option<ScanResult>,
}

impl ScanEngine {
    pub fn new<I, S>(registry: Registry, tokens: I, dos_mode: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScanEngine {
            registry,
            tokens: tokens.into_iter().map(Into::into).collect(),
            dos_mode,
            result: None,
        }
    }

    /// Register another option on this engine's own registry.
    ///
    /// Has no effect on a result that has already been computed.
    pub fn register(&mut self, descriptor: OptionDescriptor) {
        self.registry.register(descriptor);
    }

    /// Whether `/`-prefixed DOS syntax is recognised by this scan.
    pub fn dos_mode(&self) -> bool {
        self.dos_mode
    }

    /// Whether [`ScanEngine::run`] has already produced a result.
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Scan the tokens, or return the result of the earlier scan.
    pub fn run(&mut self) -> &ScanResult {
        let result = match self.result.take() {
            Some(result) => result,
            None => {
                log::debug!(
                    "scanning {} token(s) against {} option(s){}",
                    self.tokens.len(),
                    self.registry.len(),
                    if self.dos_mode { " in DOS mode" } else { "" }
                );
                Pass::new(&self.registry, &self.tokens).scan(self.dos_mode)
            }
        };
        self.result.insert(result)
    }

    /// Run the scan and hand back the result.
    pub fn into_result(mut self) -> ScanResult {
        self.run();
        self.result.unwrap_or_default()
    }
}
