/// Runtime value representation.
///
/// Defines the `Value` enum and all supported value variants, together with
/// type tags, truthiness, and the display form shown by the REPL.
pub mod core;
/// Scoped environment chain.
///
/// Defines the `Environment` type: a name-to-value store with an optional
/// link to an outer environment. Closures keep their defining environment
/// alive through shared ownership.
pub mod environment;
/// Hash key derivation for hash map values.
///
/// Defines the `HashKey` digest type, the stored key/value pair, and the
/// FNV-1a string hash. Only integers, booleans, and strings are hashable.
pub mod hash_key;
