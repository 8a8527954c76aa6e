use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::product::errors::ProductError;
use crate::user::errors::UserError;

/// User store held in process memory.
///
/// Enforces the same username and email uniqueness as the `users` table, so the service
/// sees identical conflict errors whichever store backs it.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn ensure_unique(users: &HashMap<UserId, User>, candidate: &User) -> Result<(), UserError> {
    for other in users.values().filter(|u| u.id != candidate.id) {
        if other.username == candidate.username {
            return Err(UserError::UsernameAlreadyExists(candidate.username.to_string()));
        }
        if other.email == candidate.email {
            return Err(UserError::EmailAlreadyExists(candidate.email.to_string()));
        }
    }
    Ok(())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        ensure_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.email == email).cloned())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(UserError::NotFound(user.id.to_string()));
        }
        ensure_unique(&users, &user)?;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}

/// Product catalog held in process memory.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        Ok(self.products.read().await.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Product>, ProductError> {
        let mut products: Vec<Product> = self.products.read().await.values().cloned().collect();
        products.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.0.cmp(&b.id.0))
        });
        Ok(products)
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().await;
        match products.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.id.to_string())),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        self.products
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(ProductError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;
    use crate::domain::product::models::Price;
    use crate::domain::product::models::ProductDescription;
    use crate::domain::product::models::ProductName;
    use crate::domain::user::models::DisplayName;
    use crate::domain::user::models::Gender;

    fn user(username: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            name: DisplayName::new("Test User".to_string()).unwrap(),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$placeholder".to_string(),
            gender: Gender::Female,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn product(name: &str, age_secs: i64) -> Product {
        let created = Utc::now() - Duration::seconds(age_secs);
        Product {
            id: ProductId::new(),
            name: ProductName::new(name.to_string()).unwrap(),
            description: ProductDescription::new("desc".to_string()).unwrap(),
            price: Price::new(1.5).unwrap(),
            created_at: created,
            updated_at: created,
        }
    }

    #[tokio::test]
    async fn test_user_lookup_by_each_key() {
        let repository = InMemoryUserRepository::new();
        let alice = repository
            .create(user("alice", "alice@example.com"))
            .await
            .unwrap();

        let by_id = repository.find_by_id(&alice.id).await.unwrap();
        let by_name = repository.find_by_username(&alice.username).await.unwrap();
        let by_email = repository.find_by_email(&alice.email).await.unwrap();

        assert_eq!(by_id.as_ref(), Some(&alice));
        assert_eq!(by_name.as_ref(), Some(&alice));
        assert_eq!(by_email.as_ref(), Some(&alice));
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let repository = InMemoryUserRepository::new();
        repository
            .create(user("alice", "alice@example.com"))
            .await
            .unwrap();

        let result = repository.create(user("alice", "other@example.com")).await;

        assert!(matches!(result, Err(UserError::UsernameAlreadyExists(_))));
        assert_eq!(repository.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repository = InMemoryUserRepository::new();
        repository
            .create(user("alice", "alice@example.com"))
            .await
            .unwrap();

        let result = repository.create(user("bob", "alice@example.com")).await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_keeps_own_username() {
        let repository = InMemoryUserRepository::new();
        let mut alice = repository
            .create(user("alice", "alice@example.com"))
            .await
            .unwrap();

        alice.name = DisplayName::new("Alice A.".to_string()).unwrap();
        let updated = repository.update(alice.clone()).await.unwrap();

        assert_eq!(updated.name.as_str(), "Alice A.");
    }

    #[tokio::test]
    async fn test_update_into_taken_email_rejected() {
        let repository = InMemoryUserRepository::new();
        repository
            .create(user("alice", "alice@example.com"))
            .await
            .unwrap();
        let mut bob = repository
            .create(user("bob", "bob@example.com"))
            .await
            .unwrap();

        bob.email = EmailAddress::new("alice@example.com".to_string()).unwrap();

        let result = repository.update(bob).await;
        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let repository = InMemoryUserRepository::new();
        let result = repository.update(user("ghost", "ghost@example.com")).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_products_listed_oldest_first() {
        let repository = InMemoryProductRepository::new();
        repository.create(product("newer", 10)).await.unwrap();
        repository.create(product("oldest", 30)).await.unwrap();
        repository.create(product("middle", 20)).await.unwrap();

        let names: Vec<String> = repository
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name.as_str().to_string())
            .collect();

        assert_eq!(names, vec!["oldest", "middle", "newer"]);
    }

    #[tokio::test]
    async fn test_product_delete_then_missing() {
        let repository = InMemoryProductRepository::new();
        let lamp = repository.create(product("lamp", 0)).await.unwrap();

        repository.delete(&lamp.id).await.unwrap();

        assert!(repository.is_empty().await);
        assert!(matches!(
            repository.delete(&lamp.id).await,
            Err(ProductError::NotFound(_))
        ));
        assert!(matches!(
            repository.update(lamp).await,
            Err(ProductError::NotFound(_))
        ));
    }
}
