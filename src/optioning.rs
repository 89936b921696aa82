//! The option-handling facade.
//!
//! One [`Optioning`] is created per incoming call. The author registers the
//! supported vocabulary with [`Optioning::recognize`] and
//! [`Optioning::deprecate`], runs the diagnostic passes with
//! [`Optioning::process`], then reads values back with [`Optioning::on`] and
//! [`Optioning::values`]. Instances are call-scoped and must not be reused
//! across unrelated calls.

use std::io::{self, Write};

use tracing::debug;

use crate::deprecation::{Deprecation, Removal};
use crate::error::Error;
use crate::invocation::{Arg, Invocation};
use crate::recognized::RecognizedSet;

/// Splits a variadic call, resolves deprecated option keys to their
/// replacements, and warns about deprecated or unrecognized usage.
///
/// Diagnostics go to the process standard error stream unless a different
/// sink is injected with [`Optioning::with_sink`]. Writes happen in the order
/// the passes issue them and a failed write is fatal to the caller.
pub struct Optioning<T> {
    invocation: Invocation<T>,
    deprecations: Vec<Deprecation>,
    recognized: RecognizedSet,
    sink: Box<dyn Write>,
}

impl<T: Clone> Optioning<T> {
    /// Split `args` into positional values and a working options mapping.
    pub fn new(args: Vec<Arg<T>>) -> Self {
        Self {
            invocation: Invocation::new(args),
            deprecations: Vec::new(),
            recognized: RecognizedSet::new(),
            sink: Box::new(io::stderr()),
        }
    }

    /// Replace the diagnostic sink. Tests use this to capture warnings in a
    /// buffer instead of patching the process stderr.
    pub fn with_sink(mut self, sink: impl Write + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// The untouched original argument sequence.
    pub fn raw(&self) -> &[Arg<T>] {
        self.invocation.raw()
    }

    /// The positional arguments, in original order.
    pub fn values(&self) -> &[Arg<T>] {
        self.invocation.values()
    }

    /// The value for `option`, after resolving deprecated keys to their
    /// replacements. Absent keys are `None`, never an error.
    pub fn on(&mut self, option: &str) -> Option<&T> {
        self.resolve();
        self.invocation.option(option)
    }

    /// Declare `keys` as supported, keeping first-seen order across calls.
    pub fn recognize<I, S>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recognized.extend(keys);
        self
    }

    /// Register a key rename with no removal deadline announced.
    pub fn deprecate(
        &mut self,
        option: impl Into<String>,
        replacement: impl Into<String>,
    ) -> &mut Self {
        self.deprecate_with(option, replacement, Removal::Unscheduled)
    }

    /// Register a key rename with a removal deadline.
    ///
    /// The replacement key is recognized unconditionally; the deprecated key
    /// itself also never counts as unrecognized, so callers still on the old
    /// name get exactly one warning, not two.
    pub fn deprecate_with(
        &mut self,
        option: impl Into<String>,
        replacement: impl Into<String>,
        removal: Removal,
    ) -> &mut Self {
        let option = option.into();
        let replacement = replacement.into();
        debug!(option = %option, replacement = %replacement, "registering deprecated option");
        self.recognized.add(replacement.clone());
        self.deprecations.push(Deprecation::new(option, replacement, removal));
        self
    }

    /// Warn about every deprecated key the caller actually used.
    ///
    /// Rules fire in registration order, keyed off the mapping as it looked
    /// at construction, so resolving aliases first does not suppress the
    /// warning. Only the first frame of `call_site` is used.
    pub fn deprecation_warn(&mut self, call_site: &[&str]) -> Result<&mut Self, Error> {
        for deprecation in &mut self.deprecations {
            if !self.invocation.supplied(deprecation.option()) {
                continue;
            }
            if let Some(frame) = call_site.first() {
                deprecation.set_call_site(*frame);
            }
            self.sink.write_all(deprecation.message().as_bytes())?;
        }
        Ok(self)
    }

    /// Warn about keys the caller used that were never declared supported,
    /// then summarize the supported vocabulary.
    ///
    /// Does nothing when the call carried no options mapping. The summary
    /// line is written whenever a mapping was present, even if every key was
    /// recognized.
    pub fn unrecognized_warn(&mut self, call_site: &[&str]) -> Result<&mut Self, Error> {
        if !self.invocation.has_options() {
            return Ok(self);
        }

        for key in self.invocation.supplied_keys() {
            if self.recognized.contains(key)
                || self.deprecations.iter().any(|d| d.option() == key)
            {
                continue;
            }
            let line = format!("NOTE: unrecognized option `:{key}` used.\n");
            self.sink.write_all(line.as_bytes())?;
        }

        let mut summary = format!(
            "You should use only the following: {}",
            self.recognized.summary()
        );
        if let Some(frame) = call_site.first() {
            summary.push_str(&format!("\nCalled from {frame}."));
        }
        self.sink.write_all(summary.as_bytes())?;
        Ok(self)
    }

    /// Run both diagnostic passes: deprecation warnings first, then
    /// unrecognized-key warnings, with the same call site.
    pub fn process(&mut self, call_site: &[&str]) -> Result<&mut Self, Error> {
        debug!(
            deprecations = self.deprecations.len(),
            recognized = self.recognized.len(),
            "processing options"
        );
        self.deprecation_warn(call_site)?;
        self.unrecognized_warn(call_site)?;
        Ok(self)
    }

    /// Move every deprecated key still in the working options onto its
    /// replacement key. Idempotent: a deprecated key already moved (or never
    /// supplied) leaves the replacement value untouched.
    fn resolve(&mut self) {
        for deprecation in &self.deprecations {
            if let Some(value) = self.invocation.take_option(deprecation.option()) {
                self.invocation.put_option(deprecation.replacement(), value);
            }
        }
    }
}
