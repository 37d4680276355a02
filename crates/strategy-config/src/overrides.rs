// In crates/strategy-config/src/overrides.rs

use std::collections::HashMap;

use core_types::{Symbol, Timeframe};
use strategies::{FieldMap, ParamOverride, ParamSet, StrategyDefinition, SymbolSet};

use crate::{Error, Result};

#[derive(Debug, Default)]
struct KindOverrides {
    field_map: Option<FieldMap>,
    timeframes: HashMap<Timeframe, ParamOverride>,
    symbols: HashMap<(Symbol, Timeframe), ParamOverride>,
}

impl KindOverrides {
    fn translate(&self, kind: &str, set: &SymbolSet) -> Result<ParamOverride> {
        let map = self
            .field_map
            .as_ref()
            .ok_or_else(|| Error::MissingFieldMap { kind: kind.to_string() })?;
        Ok(map.translate(set)?)
    }
}

fn duplicate_timeframe(kind: &str, timeframe: Timeframe) -> Error {
    Error::DuplicateOverride {
        scope: format!("{kind} {timeframe}"),
    }
}

fn duplicate_set(kind: &str, set: &SymbolSet) -> Error {
    Error::DuplicateOverride {
        scope: format!("{kind} {} {}", set.symbol, set.timeframe),
    }
}

/// The timeframe and symbol+timeframe override tables of every kind.
///
/// Symbol sets are translated through the kind's [`FieldMap`] when they are
/// registered, so an unmapped field fails here and never during resolution.
/// Registering a second table for the same key fails with
/// [`Error::DuplicateOverride`]; the `replace_*` methods are the explicit
/// last-write-wins path. Every registration either stores everything it was
/// given or nothing.
#[derive(Debug, Default)]
pub struct OverrideRegistry {
    kinds: HashMap<String, KindOverrides>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the field map and every table of a strategy definition.
    pub fn register(&mut self, def: &dyn StrategyDefinition) -> Result<()> {
        let kind = def.kind();
        let existing = self.kinds.get(kind);
        if existing.is_some_and(|k| !k.symbols.is_empty()) {
            return Err(Error::FieldMapLocked { kind: kind.to_string() });
        }

        let staged = KindOverrides {
            field_map: Some(def.field_map()?),
            ..Default::default()
        };
        let mut timeframes = HashMap::new();
        for (timeframe, layer) in def.timeframe_overrides() {
            layer.validate()?;
            let taken = existing.is_some_and(|k| k.timeframes.contains_key(&timeframe));
            if taken || timeframes.insert(timeframe, layer).is_some() {
                return Err(duplicate_timeframe(kind, timeframe));
            }
        }
        let mut symbols = HashMap::new();
        for set in def.symbol_sets() {
            let layer = staged.translate(kind, &set)?;
            if symbols.insert((set.symbol.clone(), set.timeframe), layer).is_some() {
                return Err(duplicate_set(kind, &set));
            }
        }

        tracing::debug!(
            kind,
            timeframe_tables = timeframes.len(),
            symbol_tables = symbols.len(),
            "Registered strategy overrides."
        );
        let entry = self.kinds.entry(kind.to_string()).or_default();
        entry.field_map = staged.field_map;
        entry.timeframes.extend(timeframes);
        entry.symbols = symbols;
        Ok(())
    }

    /// Sets the field map used by later symbol-set registrations for `kind`.
    ///
    /// Must come before any symbol set of that kind: sets already stored were
    /// translated with the previous map.
    pub fn register_field_map(&mut self, kind: &str, map: FieldMap) -> Result<()> {
        if self.kinds.get(kind).is_some_and(|k| !k.symbols.is_empty()) {
            return Err(Error::FieldMapLocked { kind: kind.to_string() });
        }
        tracing::debug!(kind, map_kind = map.kind(), "Registered field map.");
        self.kinds.entry(kind.to_string()).or_default().field_map = Some(map);
        Ok(())
    }

    pub fn insert_timeframe(
        &mut self,
        kind: &str,
        timeframe: Timeframe,
        layer: ParamOverride,
    ) -> Result<()> {
        layer.validate()?;
        if self
            .kinds
            .get(kind)
            .is_some_and(|k| k.timeframes.contains_key(&timeframe))
        {
            return Err(duplicate_timeframe(kind, timeframe));
        }
        tracing::debug!(kind, %timeframe, fields = layer.len(), "Registered timeframe override.");
        self.kinds
            .entry(kind.to_string())
            .or_default()
            .timeframes
            .insert(timeframe, layer);
        Ok(())
    }

    pub fn replace_timeframe(
        &mut self,
        kind: &str,
        timeframe: Timeframe,
        layer: ParamOverride,
    ) -> Result<()> {
        layer.validate()?;
        let entry = self.kinds.entry(kind.to_string()).or_default();
        if entry.timeframes.insert(timeframe, layer).is_some() {
            tracing::warn!(kind, %timeframe, "Replaced timeframe override.");
        }
        Ok(())
    }

    pub fn insert_symbol_set(&mut self, kind: &str, set: &SymbolSet) -> Result<()> {
        let entry = self
            .kinds
            .get_mut(kind)
            .ok_or_else(|| Error::MissingFieldMap { kind: kind.to_string() })?;
        let key = (set.symbol.clone(), set.timeframe);
        if entry.symbols.contains_key(&key) {
            return Err(duplicate_set(kind, set));
        }
        let layer = entry.translate(kind, set)?;
        tracing::debug!(
            kind,
            symbol = %set.symbol,
            timeframe = %set.timeframe,
            fields = layer.len(),
            "Registered symbol override."
        );
        entry.symbols.insert(key, layer);
        Ok(())
    }

    pub fn replace_symbol_set(&mut self, kind: &str, set: &SymbolSet) -> Result<()> {
        let entry = self
            .kinds
            .get_mut(kind)
            .ok_or_else(|| Error::MissingFieldMap { kind: kind.to_string() })?;
        let layer = entry.translate(kind, set)?;
        if entry
            .symbols
            .insert((set.symbol.clone(), set.timeframe), layer)
            .is_some()
        {
            tracing::warn!(kind, symbol = %set.symbol, timeframe = %set.timeframe, "Replaced symbol override.");
        }
        Ok(())
    }

    pub fn timeframe_override(&self, kind: &str, timeframe: Timeframe) -> Option<&ParamOverride> {
        self.kinds.get(kind)?.timeframes.get(&timeframe)
    }

    pub fn symbol_override(
        &self,
        kind: &str,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> Option<&ParamOverride> {
        self.kinds
            .get(kind)?
            .symbols
            .get(&(symbol.clone(), timeframe))
    }

    /// `base` with the `(kind, timeframe)` table applied, or `base` unchanged
    /// when there is none.
    pub fn apply_timeframe_override(
        &self,
        kind: &str,
        base: &ParamSet,
        timeframe: Timeframe,
    ) -> ParamSet {
        match self.timeframe_override(kind, timeframe) {
            Some(layer) => {
                tracing::debug!(kind, %timeframe, "Applying timeframe override.");
                base.apply(layer)
            }
            None => base.clone(),
        }
    }

    /// `base` with the exact `(kind, symbol, timeframe)` table applied, or
    /// `base` unchanged. There is no fallback to a symbol-only or
    /// timeframe-only match.
    pub fn apply_symbol_override(
        &self,
        kind: &str,
        base: &ParamSet,
        symbol: &Symbol,
        timeframe: Timeframe,
    ) -> ParamSet {
        match self.symbol_override(kind, symbol, timeframe) {
            Some(layer) => {
                tracing::debug!(kind, %symbol, %timeframe, "Applying symbol override.");
                base.apply(layer)
            }
            None => base.clone(),
        }
    }

    /// Number of (timeframe, symbol) tables registered across all kinds.
    pub fn table_counts(&self) -> (usize, usize) {
        self.kinds.values().fold((0, 0), |(tfs, syms), k| {
            (tfs + k.timeframes.len(), syms + k.symbols.len())
        })
    }
}
