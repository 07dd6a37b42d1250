use std::collections::HashMap;
use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::AuthGate;
use auth::Authenticator;
use auth::Clock;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use contact_service::domain::contact::errors::ContactError;
use contact_service::domain::contact::models::Contact;
use contact_service::domain::contact::models::ContactId;
use contact_service::domain::contact::ports::ContactRepository;
use contact_service::domain::contact::service::ContactService;
use contact_service::domain::user::errors::UserError;
use contact_service::domain::user::models::User;
use contact_service::domain::user::models::UserId;
use contact_service::domain::user::ports::UserRepository;
use contact_service::domain::user::service::UserService;
use contact_service::inbound::http::router::create_router;
use serde_json::json;
use serde_json::Value;

pub const TOKEN_TTL_SECONDS: i64 = 900;

const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub tokens: Arc<TokenService>,
    pub clock: Arc<ManualClock>,
}

/// Clock shared by the token service and the test body.
pub struct ManualClock(AtomicI64);

impl ManualClock {
    fn starting_now() -> Self {
        Self(AtomicI64::new(Utc::now().timestamp()))
    }

    pub fn advance(&self, by: Duration) {
        self.0.fetch_add(by.num_seconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.0.load(Ordering::SeqCst), 0)
            .expect("Timestamp out of range")
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        let email = user.email.as_str().to_string();
        if users.contains_key(&email) {
            return Err(UserError::EmailAlreadyExists(email));
        }
        users.insert(email, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| user.id == id)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<HashMap<ContactId, Contact>>,
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        self.contacts
            .lock()
            .unwrap()
            .insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, ContactError> {
        Ok(self.contacts.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        let mut owned: Vec<Contact> = self
            .contacts
            .lock()
            .unwrap()
            .values()
            .filter(|contact| contact.owner_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get_mut(&contact.id) {
            Some(stored) if stored.owner_id == contact.owner_id => {
                *stored = contact.clone();
                Ok(contact)
            }
            _ => Err(ContactError::NotFound(contact.id)),
        }
    }

    async fn delete(&self, contact: &Contact) -> Result<(), ContactError> {
        let mut contacts = self.contacts.lock().unwrap();
        match contacts.get(&contact.id) {
            Some(stored) if stored.owner_id == contact.owner_id => {
                contacts.remove(&contact.id);
                Ok(())
            }
            _ => Err(ContactError::NotFound(contact.id)),
        }
    }
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(ManualClock::starting_now());
        let tokens = Arc::new(
            TokenService::new(SECRET, Duration::seconds(TOKEN_TTL_SECONDS))
                .with_clock(clock.clone()),
        );

        // Cheap work factor keeps the suite fast
        let hasher = PasswordHasher::with_cost(1024, 1, 1).expect("Invalid Argon2 parameters");
        let authenticator = Arc::new(
            Authenticator::new(hasher, Arc::clone(&tokens))
                .expect("Failed to build authenticator"),
        );

        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::default()),
            authenticator,
        ));
        let contact_service = Arc::new(ContactService::new(Arc::new(
            InMemoryContactRepository::default(),
        )));

        let router = create_router(
            user_service,
            contact_service,
            AuthGate::new(Arc::clone(&tokens)),
        );

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            tokens,
            clock,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> reqwest::Response {
        self.post("/api/users/register")
            .json(&json!({
                "username": username,
                "email": email,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/users/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register `username` at `<username>@example.com` and return a fresh token.
    pub async fn signed_in(&self, username: &str) -> String {
        let email = format!("{}@example.com", username);
        self.register(username, &email, "pass_word!").await;

        let body: Value = self
            .login(&email, "pass_word!")
            .await
            .json()
            .await
            .expect("Failed to parse response");
        body["token"]
            .as_str()
            .expect("Login returned no token")
            .to_string()
    }

    /// Create a contact and return its JSON representation.
    pub async fn create_contact(&self, token: &str, name: &str) -> Value {
        let response = self
            .post_authenticated("/api/contacts", token)
            .json(&json!({
                "name": name,
                "email": format!("{}@contacts.example.com", name.to_lowercase()),
                "phone": "555-0100"
            }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);
        response.json().await.expect("Failed to parse response")
    }
}
