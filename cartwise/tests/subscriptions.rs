mod helpers;

use std::time::Duration;

use cartwise::{Decimal, PlatformId};
use helpers::{ATTA, MILK, id, store};

#[tokio::test]
async fn subscribers_see_every_mutation() {
    let mut s = store();
    let mut rx = s.subscribe();
    assert_eq!(rx.borrow().revision, 0);

    let milk = s.add_to_cart(&id(MILK), 2, None).unwrap();
    assert!(rx.has_changed().unwrap());
    {
        let snap = rx.borrow_and_update();
        assert_eq!(snap.revision, 1);
        assert_eq!(snap.entries.len(), 1);
        assert_eq!(snap.total, Decimal::new(5400, 2));
    }

    s.select_platform(PlatformId::JioMart).unwrap();
    let snap = rx.borrow_and_update().clone();
    assert_eq!(snap.selected_platform, PlatformId::JioMart);
    assert_eq!(snap.total, Decimal::new(5000, 2));

    s.update_quantity(&milk, 0).unwrap();
    let snap = rx.borrow_and_update().clone();
    assert!(snap.entries.is_empty());
    assert_eq!(snap.revision, 3);
    assert_eq!(snap, s.snapshot());
}

#[tokio::test]
async fn no_op_mutations_do_not_notify() {
    let mut s = store();
    let rx = s.subscribe();
    s.clear();
    s.select_platform(s.selected_platform()).unwrap();
    assert!(!rx.has_changed().unwrap());
    assert_eq!(s.revision(), 0);
}

#[tokio::test]
async fn background_task_observes_latest_total() {
    let mut s = store();
    let mut rx = s.subscribe();

    let watcher = tokio::spawn(async move {
        let mut last = None;
        while rx.changed().await.is_ok() {
            let snap = rx.borrow_and_update().clone();
            last = Some(snap.clone());
            if snap.revision >= 2 {
                break;
            }
        }
        last
    });

    s.add_to_cart(&id(MILK), 1, None).unwrap();
    s.add_to_cart(&id(ATTA), 1, None).unwrap();

    let last = tokio::time::timeout(Duration::from_secs(1), watcher)
        .await
        .expect("watcher finished")
        .expect("watcher did not panic")
        .expect("at least one snapshot");
    assert_eq!(last.revision, 2);
    assert_eq!(last.total, Decimal::new(2700 + 24500, 2));
}
