// Copyright 2025 Irreducible Inc.

const TRUTHY_VALUES: [&str; 7] = ["1", "on", "ON", "true", "TRUE", "yes", "YES"];

/// Read boolean flag from the environment variable.
///
/// An unset variable, or one holding anything other than the recognised truthy spellings, reads
/// as `false`.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|val| is_truthy(&val))
}

fn is_truthy(val: &str) -> bool {
	TRUTHY_VALUES.contains(&val)
}
