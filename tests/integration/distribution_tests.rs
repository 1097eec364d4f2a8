//! Upload, distribution and aggregation tests
//!
//! Every scenario runs against both the SQLite store and the memory store.

#[cfg(test)]
mod tests {
    use crate::common::{AgentFactory, TestDatabase, UploadFactory};
    use crate::{assert_err, assert_ok};
    use chrono::Duration;
    use lead_dispatch::core::aggregate::BatchRegistry;
    use lead_dispatch::core::distribution::Distributor;
    use lead_dispatch::core::ingest::{ContentType, TabularParser, validate_rows};
    use lead_dispatch::services::{AgentService, ListService};
    use lead_dispatch::storage::{ItemFilter, LeadStore, ListItemStore, MemoryStore};
    use lead_dispatch::utils::error::{DispatchError, ValidationError};
    use std::sync::Arc;
    use uuid::Uuid;

    async fn stores() -> Vec<Arc<dyn LeadStore>> {
        vec![TestDatabase::new().await.store(), Arc::new(MemoryStore::new())]
    }

    #[tokio::test]
    async fn test_five_rows_two_agents() {
        for store in stores().await {
            let agents = AgentFactory::seed(store.as_ref(), &["Alice", "Bob"]).await;
            let service = ListService::new(store.clone());

            let outcome = assert_ok!(service.upload(UploadFactory::csv(5)).await);
            assert_eq!(outcome.item_count, 5);

            let batch = assert_ok!(service.batch_detail(&outcome.batch_id).await);
            let owners: Vec<_> = batch.items.iter().map(|i| i.assigned_agent).collect();
            let (a, b) = (Some(agents[0].id), Some(agents[1].id));
            assert_eq!(owners, vec![a, b, a, b, a], "{}", store.backend_name());

            let overview = assert_ok!(service.overview().await);
            assert_eq!(overview.batches.len(), 1);
            assert_eq!(overview.batches[0].item_count, 5);
            assert_eq!(overview.batches[0].batch_id, outcome.batch_id);

            let detail = assert_ok!(service.agent_detail(agents[0].id).await);
            let positions: Vec<_> = detail.assigned_items.iter().map(|i| i.position).collect();
            assert_eq!(positions, vec![0, 2, 4]);
            assert_eq!(detail.batches.len(), 1);
            assert_eq!(detail.batches[0].item_count, 3);
            assert_eq!(detail.agent.assigned_items.len(), 3);
        }
    }

    #[tokio::test]
    async fn test_counts_are_fair_for_many_sizes() {
        for store in stores().await {
            let agents =
                AgentFactory::seed(store.as_ref(), &["A1", "A2", "A3", "A4"]).await;
            let service = ListService::new(store.clone());

            let mut expected_total = 0;
            for rows in [1usize, 3, 4, 7, 10] {
                assert_ok!(service.upload(UploadFactory::csv(rows)).await);
                expected_total += rows;
            }

            let mut counts = Vec::new();
            for agent in &agents {
                counts.push(store.count_items(&ItemFilter::agent(agent.id)).await.unwrap());
            }
            // Each run hands its remainder to the first agents again
            assert_eq!(counts, vec![8, 7, 6, 4]);
            assert_eq!(counts.iter().sum::<u64>(), expected_total as u64);
        }
    }

    #[tokio::test]
    async fn test_single_run_spread_is_at_most_one() {
        for store in stores().await {
            let agents = AgentFactory::seed(store.as_ref(), &["A", "B", "C"]).await;
            let service = ListService::new(store.clone());
            assert_ok!(service.upload(UploadFactory::csv(11)).await);

            let mut counts = Vec::new();
            for agent in &agents {
                counts.push(store.count_items(&ItemFilter::agent(agent.id)).await.unwrap());
            }
            let max = counts.iter().max().unwrap();
            let min = counts.iter().min().unwrap();
            assert!(max - min <= 1, "{counts:?}");
            assert_eq!(counts.iter().sum::<u64>(), 11);
        }
    }

    #[tokio::test]
    async fn test_no_agents_persists_nothing() {
        for store in stores().await {
            let service = ListService::new(store.clone());
            let err = assert_err!(service.upload(UploadFactory::csv(3)).await);
            assert!(matches!(err, DispatchError::NoAgents));
            assert_eq!(err.to_string(), "No agents found to distribute items");
            assert_eq!(store.count_items(&ItemFilter::default()).await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_missing_columns_persist_nothing() {
        for store in stores().await {
            AgentFactory::seed(store.as_ref(), &["Alice"]).await;
            let service = ListService::new(store.clone());

            let upload = UploadFactory::raw("text/csv", "Name,Notes\nA,x\n");
            let err = assert_err!(service.upload(upload).await);
            assert_eq!(err.to_string(), "Missing required fields: FirstName, Phone");
            assert_eq!(store.count_items(&ItemFilter::default()).await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_header_only_file_is_empty() {
        for store in stores().await {
            AgentFactory::seed(store.as_ref(), &["Alice"]).await;
            let service = ListService::new(store.clone());

            let err = assert_err!(service.upload(UploadFactory::csv(0)).await);
            assert!(matches!(
                err,
                DispatchError::Validation(ValidationError::EmptyFile)
            ));
            assert_eq!(err.to_string(), "No data found in the file");
            assert_eq!(store.count_items(&ItemFilter::default()).await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_malformed_csv_persists_nothing() {
        for store in stores().await {
            AgentFactory::seed(store.as_ref(), &["Alice"]).await;
            let service = ListService::new(store.clone());

            let upload = UploadFactory::raw("text/csv", "FirstName,Phone\nA,1\nB,2,3\n");
            let err = assert_err!(service.upload(upload).await);
            assert!(matches!(err, DispatchError::Parse(_)));
            assert_eq!(store.count_items(&ItemFilter::default()).await.unwrap(), 0);
        }
    }

    #[tokio::test]
    async fn test_deleting_an_agent_releases_only_its_items() {
        for store in stores().await {
            let agents = AgentFactory::seed(store.as_ref(), &["Alice", "Bob"]).await;
            let lists = ListService::new(store.clone());
            let agent_service = AgentService::new(store.clone());
            assert_ok!(lists.upload(UploadFactory::csv(5)).await);

            let released = assert_ok!(agent_service.delete(agents[0].id).await);
            assert_eq!(released, 3);

            let overview = assert_ok!(lists.overview().await);
            assert_eq!(overview.distribution_summary.len(), 1);
            assert_eq!(overview.distribution_summary[0].agent_id, agents[1].id);
            assert_eq!(overview.distribution_summary[0].total_assigned_count, 2);
            assert_eq!(overview.batches[0].item_count, 5);

            assert!(matches!(
                lists.agent_detail(agents[0].id).await,
                Err(DispatchError::NotFound(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_agent_detail_is_newest_first() {
        for store in stores().await {
            let agents = AgentFactory::seed(store.as_ref(), &["Alice", "Bob"]).await;
            let distributor = Distributor::new(store.clone());
            let registry = BatchRegistry::new(store.clone());

            let leads = |rows| {
                let parsed = ContentType::Csv
                    .parser()
                    .parse(UploadFactory::csv_body(rows).as_bytes())
                    .unwrap();
                validate_rows(parsed).unwrap()
            };

            let t0 = AgentFactory::epoch() + Duration::days(1);
            let old = assert_ok!(distributor.distribute_at(leads(3), t0).await);
            let new = assert_ok!(
                distributor
                    .distribute_at(leads(4), t0 + Duration::hours(1))
                    .await
            );

            let detail = assert_ok!(registry.agent_detail(agents[0].id).await);
            let order: Vec<_> = detail
                .assigned_items
                .iter()
                .map(|i| (i.upload_batch.clone(), i.position))
                .collect();
            assert_eq!(
                order,
                vec![
                    (new.batch_id.clone(), 0),
                    (new.batch_id.clone(), 2),
                    (old.batch_id.clone(), 0),
                    (old.batch_id.clone(), 2),
                ]
            );

            let batch_ids: Vec<_> = detail.batches.iter().map(|b| b.batch_id.clone()).collect();
            assert_eq!(batch_ids, vec![new.batch_id.clone(), old.batch_id.clone()]);

            let overview = assert_ok!(registry.overview().await);
            assert_eq!(overview.batches[0].batch_id, new.batch_id);
            assert_eq!(overview.batches[0].earliest_created_at, t0 + Duration::hours(1));
        }
    }

    #[tokio::test]
    async fn test_summary_is_sorted_by_name() {
        for store in stores().await {
            AgentFactory::seed(store.as_ref(), &["Zoe", "Adam", "Mia"]).await;
            let service = ListService::new(store.clone());
            assert_ok!(service.upload(UploadFactory::csv(4)).await);

            let overview = assert_ok!(service.overview().await);
            let summary: Vec<_> = overview
                .distribution_summary
                .iter()
                .map(|s| (s.name.as_str(), s.total_assigned_count))
                .collect();
            // Creation order Zoe, Adam, Mia receives rows 0..4 round-robin
            assert_eq!(summary, vec![("Adam", 1), ("Mia", 1), ("Zoe", 2)]);
        }
    }

    #[tokio::test]
    async fn test_unknown_ids_are_not_found() {
        for store in stores().await {
            let service = ListService::new(store.clone());
            assert!(matches!(
                service.agent_detail(Uuid::new_v4()).await,
                Err(DispatchError::NotFound(_))
            ));
            assert!(matches!(
                service.batch_detail("no-such-batch").await,
                Err(DispatchError::NotFound(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_unsupported_type_is_rejected() {
        for store in stores().await {
            AgentFactory::seed(store.as_ref(), &["Alice"]).await;
            let service = ListService::new(store.clone());

            let upload = UploadFactory::raw("application/json", "{}");
            let err = assert_err!(service.upload(upload).await);
            assert!(matches!(err, DispatchError::UnsupportedType(_)));
            assert_eq!(store.count_items(&ItemFilter::default()).await.unwrap(), 0);
        }
    }
}
