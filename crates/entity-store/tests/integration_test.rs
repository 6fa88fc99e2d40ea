use entity_store::{Repository, StoreActor, StoreError, StoredEntity};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    id: Option<u32>,
    owner: String,
    balance: i64,
}

impl StoredEntity for Account {
    type Id = u32;

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn assign_id(&mut self, id: u32) {
        self.id = Some(id);
    }
}

fn account(owner: &str, balance: i64) -> Account {
    Account {
        id: None,
        owner: owner.to_string(),
        balance,
    }
}

#[tokio::test]
async fn test_store_lifecycle_through_trait_object() {
    let (actor, client) = StoreActor::<Account>::new(10);
    let handle = tokio::spawn(actor.run());
    let repo: Arc<dyn Repository<Account>> = Arc::new(client);

    // 1. Insert
    let alice = repo.save(account("alice", 10)).await.unwrap();
    assert_eq!(alice.id, Some(1));

    // 2. Read
    let fetched = repo.find_by_id(1).await.unwrap();
    assert_eq!(fetched, Some(alice.clone()));

    // 3. Update (full replace)
    let updated = repo
        .save(Account {
            balance: 25,
            ..alice
        })
        .await
        .unwrap();
    assert_eq!(updated.balance, 25);
    assert_eq!(repo.find_all().await.unwrap(), vec![updated.clone()]);

    // 4. Remove
    assert_eq!(repo.remove(1).await.unwrap(), Some(updated));
    assert!(repo.find_all().await.unwrap().is_empty());

    // 5. Shutdown once the last client is gone
    drop(repo);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_store_reports_closed() {
    let (actor, client) = StoreActor::<Account>::new(1);
    drop(actor);

    let result = client.find_all().await;
    assert_eq!(result, Err(StoreError::Closed));
}

#[tokio::test]
async fn test_concurrent_saves_get_distinct_ids() {
    let (actor, client) = StoreActor::<Account>::new(4);
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.save(account(&format!("owner_{i}"), i)).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.unwrap());
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
    assert_eq!(client.find_all().await.unwrap().len(), 20);
}
