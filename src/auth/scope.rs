//! Permission scopes published by the platform.
//!
//! Callers may pass any string as a scope; the constants and [`MollieScope`] only name the
//! values the platform documents today.

// self
use crate::_prelude::*;

/// Read access to payments.
pub const SCOPE_PAYMENTS_READ: &str = "payments.read";
/// Create and update payments.
pub const SCOPE_PAYMENTS_WRITE: &str = "payments.write";
/// Read access to refunds.
pub const SCOPE_REFUNDS_READ: &str = "refunds.read";
/// Create and cancel refunds.
pub const SCOPE_REFUNDS_WRITE: &str = "refunds.write";
/// Read access to customers.
pub const SCOPE_CUSTOMERS_READ: &str = "customers.read";
/// Create and update customers.
pub const SCOPE_CUSTOMERS_WRITE: &str = "customers.write";
/// Read access to website profiles.
pub const SCOPE_PROFILES_READ: &str = "profiles.read";
/// Create and update website profiles.
pub const SCOPE_PROFILES_WRITE: &str = "profiles.write";
/// Read access to settlements.
pub const SCOPE_SETTLEMENTS_READ: &str = "settlements.read";
/// Read access to the organization profile.
pub const SCOPE_ORGANIZATIONS_READ: &str = "organizations.read";
/// Update the organization profile.
pub const SCOPE_ORGANIZATIONS_WRITE: &str = "organizations.write";

/// Error returned when parsing an unknown scope identifier into [`MollieScope`].
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown Mollie scope: {scope}.")]
pub struct UnknownScopeError {
	/// The unrecognized scope string.
	pub scope: String,
}

/// Scopes documented by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum MollieScope {
	/// `payments.read`
	PaymentsRead,
	/// `payments.write`
	PaymentsWrite,
	/// `refunds.read`
	RefundsRead,
	/// `refunds.write`
	RefundsWrite,
	/// `customers.read`
	CustomersRead,
	/// `customers.write`
	CustomersWrite,
	/// `profiles.read`
	ProfilesRead,
	/// `profiles.write`
	ProfilesWrite,
	/// `settlements.read`
	SettlementsRead,
	/// `organizations.read`
	OrganizationsRead,
	/// `organizations.write`
	OrganizationsWrite,
}
impl MollieScope {
	/// Every documented scope, in documentation order.
	pub const ALL: [MollieScope; 11] = [
		MollieScope::PaymentsRead,
		MollieScope::PaymentsWrite,
		MollieScope::RefundsRead,
		MollieScope::RefundsWrite,
		MollieScope::CustomersRead,
		MollieScope::CustomersWrite,
		MollieScope::ProfilesRead,
		MollieScope::ProfilesWrite,
		MollieScope::SettlementsRead,
		MollieScope::OrganizationsRead,
		MollieScope::OrganizationsWrite,
	];

	/// Returns the wire identifier for the scope.
	pub const fn as_str(self) -> &'static str {
		match self {
			MollieScope::PaymentsRead => SCOPE_PAYMENTS_READ,
			MollieScope::PaymentsWrite => SCOPE_PAYMENTS_WRITE,
			MollieScope::RefundsRead => SCOPE_REFUNDS_READ,
			MollieScope::RefundsWrite => SCOPE_REFUNDS_WRITE,
			MollieScope::CustomersRead => SCOPE_CUSTOMERS_READ,
			MollieScope::CustomersWrite => SCOPE_CUSTOMERS_WRITE,
			MollieScope::ProfilesRead => SCOPE_PROFILES_READ,
			MollieScope::ProfilesWrite => SCOPE_PROFILES_WRITE,
			MollieScope::SettlementsRead => SCOPE_SETTLEMENTS_READ,
			MollieScope::OrganizationsRead => SCOPE_ORGANIZATIONS_READ,
			MollieScope::OrganizationsWrite => SCOPE_ORGANIZATIONS_WRITE,
		}
	}
}
impl AsRef<str> for MollieScope {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}
impl Display for MollieScope {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for MollieScope {
	type Err = UnknownScopeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|scope| scope.as_str() == s)
			.ok_or_else(|| UnknownScopeError { scope: s.to_owned() })
	}
}
impl TryFrom<String> for MollieScope {
	type Error = UnknownScopeError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}
impl From<MollieScope> for &'static str {
	fn from(value: MollieScope) -> Self {
		value.as_str()
	}
}
impl From<MollieScope> for String {
	fn from(value: MollieScope) -> Self {
		value.as_str().to_owned()
	}
}

/// Joins scopes with the provided separator when building a `scope` parameter.
pub fn join_scopes<I, S>(scopes: I, separator: &str) -> String
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut buf = String::new();

	for (idx, scope) in scopes.into_iter().enumerate() {
		if idx > 0 {
			buf.push_str(separator);
		}

		buf.push_str(scope.as_ref());
	}

	buf
}
