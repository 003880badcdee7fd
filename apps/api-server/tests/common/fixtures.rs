//! Test fixtures and app setup utilities

use std::sync::{Arc, LazyLock};

use rand::Rng;
use rand::seq::SliceRandom;
use tokio::sync::{Mutex, OwnedMutexGuard};

use api_server::state::AppState;
use blog_core::domain::{Author, BlogPost};
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

/// Number of random posts inserted before each test.
pub const SEED_POSTS: usize = 10;

/// Tests sharing `TEST_DATABASE_URL` take turns on the database.
static SHARED_DB: LazyLock<Arc<Mutex<()>>> = LazyLock::new(|| Arc::new(Mutex::new(())));

const WORDS: &[&str] = &[
    "river", "copper", "lantern", "orbit", "maple", "signal", "harbor", "velvet", "thunder",
    "pixel", "meadow", "cobalt", "ember", "glacier", "saffron", "quartz", "willow", "beacon",
];

const FIRST_NAMES: &[&str] = &[
    "Jane", "Omar", "Priya", "Lucas", "Mei", "Tomás", "Aisha", "Noah", "Freya", "Kenji",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Haddad", "Iyer", "Silva", "Chen", "García", "Bello", "Novak", "Lind", "Sato",
];

/// A seeded store for one test. Build with [`TestApp::init`] and tear down
/// with [`TestApp::dispose`].
pub struct TestApp {
    pub store: Arc<dyn PostRepository>,
    _db_turn: Option<OwnedMutexGuard<()>>,
}

impl TestApp {
    /// Open a store (PostgreSQL when `TEST_DATABASE_URL` is set, otherwise
    /// in-memory), empty it, and insert [`SEED_POSTS`] random posts.
    pub async fn init() -> Self {
        let (store, db_turn) = open_store().await;

        store.clear().await.expect("Failed to reset test store");
        seed_posts(store.as_ref(), SEED_POSTS).await;

        Self {
            store,
            _db_turn: db_turn,
        }
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.store.clone())
    }

    /// Drop every post so the next test starts clean.
    pub async fn dispose(self) {
        self.store.clear().await.expect("Failed to tear down test store");
    }

    /// Any stored post.
    pub async fn any_post(&self) -> BlogPost {
        self.store
            .find_all()
            .await
            .expect("Failed to list posts")
            .into_iter()
            .next()
            .expect("Store has no posts")
    }
}

#[cfg(feature = "postgres")]
async fn open_store() -> (Arc<dyn PostRepository>, Option<OwnedMutexGuard<()>>) {
    match api_server::config::test_database_from_env() {
        Some(config) => {
            let turn = SHARED_DB.clone().lock_owned().await;
            let store = api_server::state::connect_store(&config, true)
                .await
                .expect("Failed to connect to TEST_DATABASE_URL");
            (store, Some(turn))
        }
        None => (Arc::new(InMemoryPostRepository::new()), None),
    }
}

#[cfg(not(feature = "postgres"))]
async fn open_store() -> (Arc<dyn PostRepository>, Option<OwnedMutexGuard<()>>) {
    (Arc::new(InMemoryPostRepository::new()), None)
}

/// Insert `count` random posts.
pub async fn seed_posts(store: &dyn PostRepository, count: usize) {
    tracing::info!("seeding blog post data");
    let posts = (0..count).map(|_| generate_post()).collect();
    store
        .insert_many(posts)
        .await
        .expect("Failed to seed posts");
}

/// A random post with a two-word title and a short paragraph.
pub fn generate_post() -> BlogPost {
    let mut rng = rand::thread_rng();

    let title = format!("{} {}", pick(&mut rng, WORDS), pick(&mut rng, WORDS));
    let author = Author::new(pick(&mut rng, FIRST_NAMES), pick(&mut rng, LAST_NAMES));
    let content = paragraph(&mut rng);

    BlogPost::new(title, author, content)
}

fn paragraph(rng: &mut impl Rng) -> String {
    let len = rng.gen_range(8..24);
    let words: Vec<&str> = (0..len).map(|_| pick(&mut *rng, WORDS)).collect();
    format!("{}.", words.join(" "))
}

fn pick<'a>(rng: &mut impl Rng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or("lorem")
}
