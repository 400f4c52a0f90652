pub mod errors;
pub mod context;
pub mod lexer;
pub mod cache;
pub mod value;
pub mod listeners;  // init notifications

use std::cell::RefCell;
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, trace};

use cache::{keys_equal, Cache};
use context::Context;
use errors::Result;
use listeners::{Listener, Registry};
use value::EnumValue;

pub use value::{FromToken, TokenEnum};

/// Tokenized argument text with typed, memoized lookups.
///
/// Lookups take `&self`; results are cached behind a `RefCell`, so a
/// `CommandLine` belongs to a single thread.
#[derive(Debug, Default)]
pub struct CommandLine {
    ctx: Context,
    raw: String,
    tokens: Vec<String>,
    cache: RefCell<Cache>,
    listeners: Registry,
}

impl CommandLine {
    pub fn new(ctx: Context) -> Self {
        Self { ctx, ..Self::default() }
    }

    /// Build from `text` with default options.
    pub fn parse(text: impl Into<String>) -> Self {
        let mut cmd = Self::default();
        cmd.init(text);
        cmd
    }

    /// Replace the text, re-tokenize, drop cached results and notify listeners.
    pub fn init(&mut self, text: impl Into<String>) {
        self.raw = text.into();
        self.tokens = lexer::tokenize(&self.raw);
        self.cache.get_mut().clear();
        debug!(tokens = self.tokens.len(), "command line initialized");

        let this: &Self = self;
        this.listeners.notify(this);
    }

    /// Initialize from separate arguments, e.g. `std::env::args().skip(1)`.
    ///
    /// Arguments that would not survive tokenization as-is are quoted.
    pub fn init_from_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = args.into_iter().map(|a| quote_arg(a.as_ref())).join(" ");
        self.init(text);
    }

    /// Read `path` and initialize from its contents.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.init(text);
        Ok(())
    }

    pub fn register<L: Listener + 'static>(&mut self, listener: L) {
        self.listeners.register(listener);
    }

    pub fn is_enabled(&self) -> bool {
        self.ctx.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.ctx.enabled = enabled;
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn raw_text(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of memoized lookups since the last `init`.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.ctx.enabled && self.tokens.iter().any(|t| keys_equal(t, key))
    }

    /// Look up the token after `key` as a `T`.
    ///
    /// Returns `default` when disabled, when the key is absent or last, or
    /// when the token does not convert. Only found keys are memoized, so an
    /// absent key yields whatever default each caller passes.
    pub fn get<T: FromToken>(&self, key: &str, default: T) -> T {
        if !self.ctx.enabled {
            return default;
        }
        if let Some(hit) = self.cache.borrow().get::<T>(key) {
            trace!(key, "cache hit");
            return hit;
        }
        let Some(token) = self.find_value(key) else {
            trace!(key, "key not found");
            return default;
        };
        let value = match T::parse_token(token) {
            Ok(v) => v,
            Err(e) => {
                trace!(key, error = %e, "conversion failed, using default");
                default
            }
        };
        self.cache.borrow_mut().insert(key, &value);
        value
    }

    pub fn get_string(&self, key: &str, default: impl Into<String>) -> String {
        self.get(key, default.into())
    }

    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key, default)
    }

    pub fn get_float(&self, key: &str, default: f64) -> f64 {
        self.get(key, default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key, default)
    }

    pub fn get_enum<T: TokenEnum>(&self, key: &str, default: T) -> T {
        self.get(key, EnumValue(default)).0
    }

    // First match wins; a key in last position has no value.
    fn find_value(&self, key: &str) -> Option<&str> {
        self.tokens
            .iter()
            .tuple_windows()
            .find(|(k, _)| keys_equal(k, key))
            .map(|(_, v)| v.as_str())
    }
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && !arg.contains(|c: char| c.is_whitespace() || c == '"')
        && !arg.contains("//")
        && !arg.contains("/*");
    if plain {
        arg.to_string()
    } else {
        format!("\"{}\"", arg.replace('"', "\"\""))
    }
}
