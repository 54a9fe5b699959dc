//! Resource owner (organization) returned by the "who am I" endpoint.

// self
use crate::_prelude::*;

/// Immutable wrapper around the raw organization object returned after authorization.
///
/// No schema is enforced: the raw body is kept as-is and accessors read straight from it.
/// Use [`organization`](Self::organization) when a typed view is needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MollieResourceOwner {
	raw: JsonMap<String, JsonValue>,
}
impl MollieResourceOwner {
	/// Wraps a raw organization object.
	pub fn new(raw: JsonMap<String, JsonValue>) -> Self {
		Self { raw }
	}

	/// Organization identifier (`id`), e.g. `org_123`.
	pub fn id(&self) -> Option<&str> {
		self.string_field("id")
	}

	/// Object type reported by the platform (`resource`), usually `organization`.
	pub fn resource(&self) -> Option<&str> {
		self.string_field("resource")
	}

	/// Registered organization name.
	pub fn name(&self) -> Option<&str> {
		self.string_field("name")
	}

	/// Contact email address.
	pub fn email(&self) -> Option<&str> {
		self.string_field("email")
	}

	/// Preferred locale, such as `nl_NL`.
	pub fn locale(&self) -> Option<&str> {
		self.string_field("locale")
	}

	/// Chamber of commerce registration number.
	pub fn registration_number(&self) -> Option<&str> {
		self.string_field("registrationNumber")
	}

	/// VAT number.
	pub fn vat_number(&self) -> Option<&str> {
		self.string_field("vatNumber")
	}

	/// Looks up any field of the raw body.
	pub fn get(&self, field: &str) -> Option<&JsonValue> {
		self.raw.get(field)
	}

	/// Returns the raw body.
	pub fn raw(&self) -> &JsonMap<String, JsonValue> {
		&self.raw
	}

	/// Consumes the wrapper, returning the raw body.
	pub fn into_raw(self) -> JsonMap<String, JsonValue> {
		self.raw
	}

	/// Decodes the raw body into a typed [`Organization`].
	///
	/// Failures report the JSON path of the offending field.
	pub fn organization(
		&self,
	) -> Result<Organization, serde_path_to_error::Error<serde_json::Error>> {
		serde_path_to_error::deserialize(JsonValue::Object(self.raw.clone()))
	}

	fn string_field(&self, field: &str) -> Option<&str> {
		self.raw.get(field).and_then(JsonValue::as_str)
	}
}
impl From<JsonMap<String, JsonValue>> for MollieResourceOwner {
	fn from(raw: JsonMap<String, JsonValue>) -> Self {
		Self::new(raw)
	}
}

/// Typed view of the organization profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
	/// Organization identifier.
	pub id: String,
	/// Object type, usually `organization`.
	#[serde(default)]
	pub resource: Option<String>,
	/// Registered organization name.
	#[serde(default)]
	pub name: Option<String>,
	/// Contact email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Preferred locale.
	#[serde(default)]
	pub locale: Option<String>,
	/// Postal address.
	#[serde(default)]
	pub address: Option<OrganizationAddress>,
	/// Chamber of commerce registration number.
	#[serde(default)]
	pub registration_number: Option<String>,
	/// VAT number.
	#[serde(default)]
	pub vat_number: Option<String>,
}

/// Postal address attached to an [`Organization`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationAddress {
	/// Street name and house number.
	pub street_and_number: Option<String>,
	/// Postal code.
	pub postal_code: Option<String>,
	/// City.
	pub city: Option<String>,
	/// ISO 3166-1 alpha-2 country code.
	pub country: Option<String>,
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	fn owner(value: JsonValue) -> MollieResourceOwner {
		match value {
			JsonValue::Object(raw) => MollieResourceOwner::new(raw),
			other => panic!("Fixture must be a JSON object, got {other}."),
		}
	}

	#[test]
	fn accessors_read_raw_fields() {
		let owner = owner(json!({
			"resource": "organization",
			"id": "org_123",
			"name": "Acme",
			"email": "billing@acme.test",
			"registrationNumber": "30204462",
			"vatNumber": 42,
		}));

		assert_eq!(owner.id(), Some("org_123"));
		assert_eq!(owner.resource(), Some("organization"));
		assert_eq!(owner.name(), Some("Acme"));
		assert_eq!(owner.email(), Some("billing@acme.test"));
		assert_eq!(owner.registration_number(), Some("30204462"));
		assert_eq!(owner.vat_number(), None, "Non-string fields are not coerced.");
		assert_eq!(owner.get("vatNumber"), Some(&json!(42)));
		assert_eq!(owner.locale(), None);
	}

	#[test]
	fn organization_decodes_typed_view() {
		let owner = owner(json!({
			"id": "org_123",
			"name": "Acme",
			"address": {
				"streetAndNumber": "Keizersgracht 313",
				"city": "Amsterdam",
				"country": "NL",
			},
		}));
		let organization = owner.organization().expect("Organization should decode.");

		assert_eq!(organization.id, "org_123");
		assert_eq!(organization.name.as_deref(), Some("Acme"));

		let address = organization.address.expect("Address should be present.");

		assert_eq!(address.street_and_number.as_deref(), Some("Keizersgracht 313"));
		assert_eq!(address.postal_code, None);
	}

	#[test]
	fn organization_reports_failing_path() {
		let owner = owner(json!({ "id": "org_1", "address": { "city": 7 } }));
		let err = owner.organization().expect_err("Numeric city should fail to decode.");

		assert_eq!(err.path().to_string(), "address.city");
	}
}
