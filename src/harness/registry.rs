//! Symbol table with atomic, restorable rebinding.
//!
//! One table stands in for one target module: a mapping from symbol name to
//! the currently live implementation. The runner swaps a replacement in with
//! [`SymbolTable::replace`] after capturing the original via
//! [`SymbolTable::snapshot`], and puts the original back with
//! [`SymbolTable::restore`]. The table is an owned value handed to the
//! runner, so exactly one writer exists per run by construction.

use std::collections::BTreeMap;

use thiserror::Error;

use super::value::{CallError, NativeFn, Value};

/// Registry failures. Both variants are fatal to a harness run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The target symbol does not exist in the module.
    #[error("module `{module}` has no symbol `{symbol}`")]
    SymbolNotFound {
        /// Module name.
        module: String,
        /// Missing symbol.
        symbol: String,
    },
    /// The binding slot to restore into has disappeared.
    #[error("cannot restore `{symbol}` into module `{module}`: binding slot disappeared")]
    RestorationFailed {
        /// Module name.
        module: String,
        /// Symbol whose slot vanished.
        symbol: String,
    },
}

/// Original implementation captured before a replacement was swapped in.
pub struct OriginalBinding {
    symbol: String,
    callable: NativeFn,
}

impl OriginalBinding {
    /// Symbol this binding belongs to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl std::fmt::Debug for OriginalBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OriginalBinding")
            .field("symbol", &self.symbol)
            .finish_non_exhaustive()
    }
}

/// Named-function table for one target module.
pub struct SymbolTable {
    module: String,
    bindings: BTreeMap<String, NativeFn>,
}

impl SymbolTable {
    /// Create an empty table for `module`.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            bindings: BTreeMap::new(),
        }
    }

    /// Module name this table represents.
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Install an implementation under `symbol`.
    pub fn bind(&mut self, symbol: impl Into<String>, callable: NativeFn) {
        self.bindings.insert(symbol.into(), callable);
    }

    /// Remove a binding, returning it if present.
    pub fn unbind(&mut self, symbol: &str) -> Option<NativeFn> {
        self.bindings.remove(symbol)
    }

    /// Whether `symbol` is currently bound.
    pub fn contains(&self, symbol: &str) -> bool {
        self.bindings.contains_key(symbol)
    }

    /// Bound symbol names, in order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Invoke the implementation currently bound under `symbol`.
    pub fn call(&self, symbol: &str, args: &[Value]) -> Result<Value, CallError> {
        match self.bindings.get(symbol) {
            Some(callable) => callable(args),
            None => Err(CallError::UnknownSymbol(symbol.to_string())),
        }
    }

    /// Capture the current implementation of `symbol`.
    pub fn snapshot(&self, symbol: &str) -> Result<OriginalBinding, RegistryError> {
        match self.bindings.get(symbol) {
            Some(callable) => Ok(OriginalBinding {
                symbol: symbol.to_string(),
                callable: callable.clone(),
            }),
            None => Err(RegistryError::SymbolNotFound {
                module: self.module.clone(),
                symbol: symbol.to_string(),
            }),
        }
    }

    /// Rebind `symbol` to `replacement`. No signature validation happens
    /// here; an incompatible replacement fails later, at invocation time.
    pub fn replace(&mut self, symbol: &str, replacement: NativeFn) {
        self.bindings.insert(symbol.to_string(), replacement);
    }

    /// Rebind the captured original. Must be paired one-to-one with the
    /// [`SymbolTable::replace`] that displaced it.
    pub fn restore(&mut self, original: OriginalBinding) -> Result<(), RegistryError> {
        if !self.bindings.contains_key(&original.symbol) {
            return Err(RegistryError::RestorationFailed {
                module: self.module.clone(),
                symbol: original.symbol,
            });
        }
        self.bindings.insert(original.symbol, original.callable);
        Ok(())
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("module", &self.module)
            .field("symbols", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}
