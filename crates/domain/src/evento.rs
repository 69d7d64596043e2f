//! Evento: an event with a cost, stored with an open set of fields.
//!
//! Only `id` is owned by the server. `name` and `costo` are the documented
//! properties, but any other property a client sends is kept as-is.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::EventoId;

const ID_KEY: &str = "id";
const NAME_KEY: &str = "name";
const COSTO_KEY: &str = "costo";

/// An open JSON object of partial [`Evento`] properties.
///
/// Used as the body of both create and merge-update. Deserialization only
/// accepts a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(
    feature = "openapi",
    schema(
        value_type = Object,
        examples(json!({"name": "Animación", "costo": "s/5000"}))
    )
)]
pub struct Fields(Map<String, Value>);

impl Fields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a property, returning the updated set.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Remove the `id` property, if any. Any JSON value is a valid id.
    pub fn take_id(&mut self) -> Option<EventoId> {
        self.0.shift_remove(ID_KEY).map(EventoId::from)
    }
}

/// A record of the `eventos` collection.
///
/// Serializes as a flat JSON object with `id` first, followed by the other
/// properties in the order they were received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(
    feature = "openapi",
    schema(examples(json!({"id": "d5fE_asz", "name": "Animación", "costo": "s/5000"})))
)]
pub struct Evento {
    /// Generated 8-character id, or the value the client supplied.
    id: EventoId,
    /// `name`, `costo` and any other property sent by a client.
    #[serde(flatten)]
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    fields: Map<String, Value>,
}

impl Evento {
    /// Create a builder for constructing an [`Evento`].
    #[must_use]
    pub fn builder() -> EventoBuilder {
        EventoBuilder::default()
    }

    /// Build a new record from a create body.
    ///
    /// `generated` is the base identifier; an `id` in `fields` is spread on
    /// top of it and wins.
    #[must_use]
    pub fn create(generated: EventoId, mut fields: Fields) -> Self {
        let id = fields.take_id().unwrap_or(generated);
        Self {
            id,
            fields: fields.0,
        }
    }

    /// Shallow-merge `fields` onto this record.
    ///
    /// Present properties overwrite, absent ones are preserved and new ones
    /// are appended. An `id` in `fields` replaces the record identifier.
    pub fn merge(&mut self, mut fields: Fields) {
        if let Some(id) = fields.take_id() {
            self.id = id;
        }
        self.fields.extend(fields.0);
    }

    #[must_use]
    pub fn id(&self) -> &EventoId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get(NAME_KEY).and_then(Value::as_str)
    }

    #[must_use]
    pub fn costo(&self) -> Option<&str> {
        self.get(COSTO_KEY).and_then(Value::as_str)
    }

    /// Look up any property other than `id`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether this record is identified by `id`.
    #[must_use]
    pub fn has_id(&self, id: &EventoId) -> bool {
        self.id.matches(id)
    }
}

/// Step-by-step builder for [`Evento`].
#[derive(Debug, Default)]
pub struct EventoBuilder {
    id: Option<EventoId>,
    fields: Map<String, Value>,
}

impl EventoBuilder {
    #[must_use]
    pub fn id(mut self, id: EventoId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(self, name: impl Into<String>) -> Self {
        self.field(NAME_KEY, name.into())
    }

    #[must_use]
    pub fn costo(self, costo: impl Into<String>) -> Self {
        self.field(COSTO_KEY, costo.into())
    }

    /// Set an arbitrary property. An `id` key is ignored, use [`Self::id`].
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != ID_KEY {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Consume the builder and return an [`Evento`], generating an id if none
    /// was set.
    #[must_use]
    pub fn build(self) -> Evento {
        Evento {
            id: self.id.unwrap_or_else(EventoId::generate),
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Fields {
        serde_json::from_value(value).unwrap()
    }

    fn animacion(id: &str) -> Evento {
        Evento::builder()
            .id(EventoId::from(id))
            .name("Animación")
            .costo("s/5000")
            .build()
    }

    #[test]
    fn should_use_generated_id_when_body_has_none() {
        let generated = EventoId::from("abcdefgh");
        let evento = Evento::create(
            generated.clone(),
            fields(json!({"name": "Animación", "costo": "s/5000"})),
        );

        assert_eq!(evento.id(), &generated);
        assert_eq!(evento.name(), Some("Animación"));
        assert_eq!(evento.costo(), Some("s/5000"));
    }

    #[test]
    fn should_let_client_id_win_when_body_has_one() {
        let evento = Evento::create(
            EventoId::generate(),
            fields(json!({"id": "mine", "name": "Animación"})),
        );

        assert_eq!(evento.id().as_str(), Some("mine"));
        assert!(evento.get("id").is_none());
    }

    #[test]
    fn should_store_non_string_client_id_as_sent() {
        let evento = Evento::create(
            EventoId::generate(),
            fields(json!({"id": 42, "name": "Animación", "costo": "s/5000"})),
        );

        assert_eq!(
            serde_json::to_value(&evento).unwrap(),
            json!({"id": 42, "name": "Animación", "costo": "s/5000"})
        );
        assert!(evento.has_id(&EventoId::from("42")));
    }

    #[test]
    fn should_keep_unknown_fields_when_created() {
        let evento = Evento::create(
            EventoId::generate(),
            fields(json!({"name": "Boda", "costo": "s/9000", "lugar": "Lima", "invitados": 120})),
        );

        assert_eq!(evento.get("lugar"), Some(&json!("Lima")));
        assert_eq!(evento.get("invitados"), Some(&json!(120)));
    }

    #[test]
    fn should_serialize_flat_with_id_first() {
        let evento = animacion("X");
        let json = serde_json::to_string(&evento).unwrap();
        assert_eq!(json, r#"{"id":"X","name":"Animación","costo":"s/5000"}"#);
    }

    #[test]
    fn should_only_replace_supplied_fields_when_merged() {
        let mut evento = animacion("X");
        evento.merge(fields(json!({"costo": "s/6000"})));

        assert_eq!(
            serde_json::to_value(&evento).unwrap(),
            json!({"id": "X", "name": "Animación", "costo": "s/6000"})
        );
    }

    #[test]
    fn should_append_new_fields_when_merged() {
        let mut evento = animacion("X");
        evento.merge(fields(json!({"lugar": "Cusco"})));

        assert_eq!(evento.get("lugar"), Some(&json!("Cusco")));
        assert_eq!(evento.name(), Some("Animación"));
    }

    #[test]
    fn should_replace_id_when_merge_body_carries_one() {
        let mut evento = animacion("X");
        evento.merge(fields(json!({"id": "Y"})));
        assert_eq!(evento.id().as_str(), Some("Y"));

        evento.merge(fields(json!({"id": null})));
        assert_eq!(serde_json::to_value(&evento).unwrap()["id"], Value::Null);
    }

    #[test]
    fn should_reject_non_object_fields() {
        let result: Result<Fields, _> = serde_json::from_value(json!(["name"]));
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_stored_record_without_id() {
        let result: Result<Evento, _> =
            serde_json::from_value(json!({"name": "sin id", "costo": "s/2"}));
        assert!(result.is_err());
    }

    #[test]
    fn should_ignore_id_key_in_builder_field() {
        let evento = Evento::builder()
            .id(EventoId::from("X"))
            .field("id", "Y")
            .build();
        assert_eq!(evento.id().as_str(), Some("X"));
        assert!(evento.get("id").is_none());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let evento = animacion("d5fE_asz");
        let json = serde_json::to_string(&evento).unwrap();
        let parsed: Evento = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, evento);
    }
}
