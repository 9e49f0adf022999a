//! Global Object Identification
//!
//! Ids exposed to clients are `base64("Type:localId")`, unique across types.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::Entity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGlobalId {
    pub type_name: String,
    pub id: String,
}

pub fn to_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{}:{}", type_name, id))
}

/// Global id of an entity
pub fn global_id_of<E: Entity>(entity: &E) -> String
where
    E::Id: ToString,
{
    to_global_id(E::TYPE_NAME, &entity.id().to_string())
}

/// Split a global id; `None` when it is not base64 of `Type:id`
pub fn from_global_id(global_id: &str) -> Option<ResolvedGlobalId> {
    let decoded = STANDARD.decode(global_id).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (type_name, id) = decoded.split_once(':')?;
    if type_name.is_empty() {
        return None;
    }
    Some(ResolvedGlobalId {
        type_name: type_name.to_string(),
        id: id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Todo, User};

    #[test]
    fn test_known_encodings() {
        assert_eq!(to_global_id("Todo", "0"), "VG9kbzow");
        assert_eq!(to_global_id("User", "me"), "VXNlcjptZQ==");
    }

    #[test]
    fn test_entities_use_their_type_name() {
        let todo = Todo::new(7, "x".to_string(), false);
        assert_eq!(from_global_id(&global_id_of(&todo)).unwrap().type_name, "Todo");
        assert_eq!(global_id_of(&User::viewer()), "VXNlcjptZQ==");
    }

    #[test]
    fn test_decoding() {
        let resolved = from_global_id("VG9kbzow").unwrap();
        assert_eq!(resolved, ResolvedGlobalId { type_name: "Todo".to_string(), id: "0".to_string() });
    }

    #[test]
    fn test_id_may_contain_colons() {
        let resolved = from_global_id(&to_global_id("Todo", "a:b")).unwrap();
        assert_eq!(resolved.id, "a:b");
    }

    #[test]
    fn test_malformed_ids() {
        assert_eq!(from_global_id("not base64!"), None);
        assert_eq!(from_global_id(&STANDARD.encode("no separator")), None);
        assert_eq!(from_global_id(&STANDARD.encode(":7")), None);
    }
}
