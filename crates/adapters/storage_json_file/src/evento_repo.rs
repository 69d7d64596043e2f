//! JSON document implementation of [`EventoRepository`].

use std::future::Future;

use eventos_app::ports::EventoRepository;
use eventos_domain::error::EventosError;
use eventos_domain::evento::{Evento, Fields};
use eventos_domain::id::EventoId;

use crate::database::Database;

/// Name of the document key holding the records.
pub const COLLECTION: &str = "eventos";

/// Document-backed evento repository.
pub struct JsonEventoRepository {
    db: Database,
}

impl JsonEventoRepository {
    /// Create a new repository on top of the given document store.
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl EventoRepository for JsonEventoRepository {
    fn get_all(&self) -> impl Future<Output = Result<Vec<Evento>, EventosError>> + Send {
        let db = self.db.clone();
        async move {
            let document = db.lock().await;
            Ok(document.collection(COLLECTION)?)
        }
    }

    fn get_by_id(
        &self,
        id: &EventoId,
    ) -> impl Future<Output = Result<Option<Evento>, EventosError>> + Send {
        let db = self.db.clone();
        let id = id.clone();
        async move {
            let document = db.lock().await;
            let eventos: Vec<Evento> = document.collection(COLLECTION)?;
            Ok(eventos.into_iter().find(|e| e.has_id(&id)))
        }
    }

    fn append(&self, evento: Evento) -> impl Future<Output = Result<Evento, EventosError>> + Send {
        let db = self.db.clone();
        async move {
            let mut document = db.lock().await;
            let mut eventos: Vec<Evento> = document.collection(COLLECTION)?;
            eventos.push(evento.clone());
            document.commit(COLLECTION, &eventos).await?;
            Ok(evento)
        }
    }

    fn append_if_absent(
        &self,
        evento: Evento,
    ) -> impl Future<Output = Result<Option<Evento>, EventosError>> + Send {
        let db = self.db.clone();
        async move {
            let mut document = db.lock().await;
            let mut eventos: Vec<Evento> = document.collection(COLLECTION)?;
            if eventos.iter().any(|e| e.has_id(evento.id())) {
                return Ok(None);
            }
            eventos.push(evento.clone());
            document.commit(COLLECTION, &eventos).await?;
            Ok(Some(evento))
        }
    }

    fn merge_update(
        &self,
        id: &EventoId,
        fields: Fields,
    ) -> impl Future<Output = Result<Option<Evento>, EventosError>> + Send {
        let db = self.db.clone();
        let id = id.clone();
        async move {
            let mut document = db.lock().await;
            let mut eventos: Vec<Evento> = document.collection(COLLECTION)?;
            let Some(evento) = eventos.iter_mut().find(|e| e.has_id(&id)) else {
                return Ok(None);
            };
            evento.merge(fields);
            let updated = evento.clone();
            document.commit(COLLECTION, &eventos).await?;
            Ok(Some(updated))
        }
    }

    fn remove_all(&self, id: &EventoId) -> impl Future<Output = Result<usize, EventosError>> + Send {
        let db = self.db.clone();
        let id = id.clone();
        async move {
            let mut document = db.lock().await;
            let mut eventos: Vec<Evento> = document.collection(COLLECTION)?;
            let before = eventos.len();
            eventos.retain(|e| !e.has_id(&id));
            let removed = before - eventos.len();
            if removed > 0 {
                document.commit(COLLECTION, &eventos).await?;
            }
            Ok(removed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Config;
    use serde_json::{Value, json};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, PathBuf, JsonEventoRepository) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db.json");
        let db = Config { path: path.clone() }.build().await.unwrap();
        (dir, path, JsonEventoRepository::new(db))
    }

    fn id(value: &str) -> EventoId {
        EventoId::from(value)
    }

    fn animacion(value: &str) -> Evento {
        Evento::builder()
            .id(id(value))
            .name("Animación")
            .costo("s/5000")
            .build()
    }

    fn read_file(path: &Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn should_append_and_retrieve_evento() {
        let (_dir, _path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();

        let fetched = repo.get_by_id(&id("X")).await.unwrap().unwrap();
        assert_eq!(fetched, animacion("X"));
    }

    #[tokio::test]
    async fn should_return_none_when_evento_not_found() {
        let (_dir, _path, repo) = setup().await;
        let result = repo.get_by_id(&id("X")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_write_through_on_append() {
        let (_dir, path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();

        assert_eq!(
            read_file(&path),
            json!({"eventos": [{"id": "X", "name": "Animación", "costo": "s/5000"}]})
        );
    }

    #[tokio::test]
    async fn should_list_eventos_in_insertion_order() {
        let (_dir, _path, repo) = setup().await;
        repo.append(animacion("B")).await.unwrap();
        repo.append(animacion("A")).await.unwrap();
        repo.append(animacion("C")).await.unwrap();

        let ids: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|e| e.id().to_string())
            .collect();
        assert_eq!(ids, ["B", "A", "C"]);
    }

    #[tokio::test]
    async fn should_merge_fields_and_persist() {
        let (_dir, path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();

        let updated = repo
            .merge_update(&id("X"), Fields::new().with("costo", "s/6000"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.costo(), Some("s/6000"));
        assert_eq!(
            read_file(&path),
            json!({"eventos": [{"id": "X", "name": "Animación", "costo": "s/6000"}]})
        );
    }

    #[tokio::test]
    async fn should_return_none_when_merging_missing_evento() {
        let (_dir, path, repo) = setup().await;
        let result = repo
            .merge_update(&id("X"), Fields::new().with("costo", "s/6000"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(read_file(&path), json!({"eventos": []}));
    }

    #[tokio::test]
    async fn should_persist_numeric_id_replacement_on_merge() {
        let (_dir, path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();

        repo.merge_update(&id("X"), Fields::new().with("id", 5))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(read_file(&path)["eventos"][0]["id"], json!(5));
        assert!(repo.get_by_id(&id("5")).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn should_skip_append_when_id_already_stored() {
        let (_dir, path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();

        let result = repo
            .append_if_absent(Evento::builder().id(id("X")).name("Boda").build())
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(read_file(&path)["eventos"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_store_only_one_of_racing_appends_with_same_id() {
        let (_dir, path, repo) = setup().await;
        let repo = std::sync::Arc::new(repo);

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let repo = std::sync::Arc::clone(&repo);
                tokio::spawn(async move { repo.append_if_absent(animacion("dup")).await })
            })
            .collect();
        let mut stored = 0;
        for task in tasks {
            if task.await.unwrap().unwrap().is_some() {
                stored += 1;
            }
        }

        assert_eq!(stored, 1);
        assert_eq!(read_file(&path)["eventos"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_remove_every_matching_evento() {
        let (_dir, _path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();
        repo.append(animacion("Y")).await.unwrap();
        repo.append(animacion("X")).await.unwrap();

        let removed = repo.remove_all(&id("X")).await.unwrap();

        assert_eq!(removed, 2);
        assert_eq!(repo.get_all().await.unwrap(), vec![animacion("Y")]);
    }

    #[tokio::test]
    async fn should_report_zero_when_removing_missing_evento() {
        let (_dir, _path, repo) = setup().await;
        assert_eq!(repo.remove_all(&id("X")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_reload_records_after_reopen() {
        let (_dir, path, repo) = setup().await;
        repo.append(animacion("X")).await.unwrap();
        drop(repo);

        let db = Config { path }.build().await.unwrap();
        let reopened = JsonEventoRepository::new(db);

        assert_eq!(reopened.get_all().await.unwrap(), vec![animacion("X")]);
    }

    #[tokio::test]
    async fn should_serialize_concurrent_appends() {
        let (_dir, path, repo) = setup().await;
        let repo = std::sync::Arc::new(repo);

        let tasks: Vec<_> = (0..16)
            .map(|n| {
                let repo = std::sync::Arc::clone(&repo);
                tokio::spawn(async move { repo.append(animacion(&format!("e{n}"))).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(repo.get_all().await.unwrap().len(), 16);
        assert_eq!(read_file(&path)["eventos"].as_array().unwrap().len(), 16);
    }
}
