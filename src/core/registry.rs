//! # Service Registry & Dependency Injection
//!
//! Spring의 `ApplicationContext`에 해당하는 타입 기반 컴포넌트 레지스트리입니다.
//!
//! ## 동작 방식
//!
//! 1. **인프라 등록**: `Database`, `RedisClient`, `AppSettings` 처럼 비동기 연결이나
//!    외부 설정이 필요한 컴포넌트는 [`ServiceLocator::set`]으로 직접 등록합니다.
//! 2. **자동 등록**: 리포지토리와 서비스는 [`Component`]를 구현하고
//!    `register_repository!` / `register_service!` 매크로로 `inventory`에 제출됩니다.
//! 3. **지연 생성**: [`ServiceLocator::get`] 최초 호출 시 생성자가 실행되고,
//!    생성자는 같은 로케이터에서 자신의 의존성을 다시 `get` 합니다.
//! 4. **요청 주입**: 핸들러는 [`Inject<T>`] 추출기로 `web::Data<ServiceLocator>`에서
//!    컴포넌트를 꺼냅니다.
//!
//! | Spring | 이 레지스트리 |
//! |--------|---------------|
//! | `@Repository` | `register_repository!(UserRepository, "user_repository")` |
//! | `@Service` | `register_service!(UserService, "user_service")` |
//! | `@Autowired` 생성자 주입 | `Component::build(locator)` |
//! | `ApplicationContext.getBean` | `locator.get::<T>()` |
//!
//! 로케이터는 전역 싱글톤이 아닌 값이므로 테스트마다 독립된 데이터베이스를 가진
//! 로케이터를 만들 수 있습니다.
//!
//! ```rust,ignore
//! pub struct LabelService {
//!     label_repo: Arc<LabelRepository>,
//!     task_repo: Arc<TaskRepository>,
//! }
//!
//! impl Component for LabelService {
//!     fn build(locator: &ServiceLocator) -> AppResult<Self> {
//!         Ok(Self {
//!             label_repo: locator.get()?,
//!             task_repo: locator.get()?,
//!         })
//!     }
//! }
//!
//! register_service!(LabelService, "label_service");
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use once_cell::sync::Lazy;

use crate::core::errors::{AppError, AppResult};
use crate::utils::display_terminal::{
    print_boxed_title, print_cache_initialized, print_final_summary, print_step_complete,
    print_step_start, print_sub_task,
};

/// 레지스트리가 생성할 수 있는 컴포넌트
///
/// 생성자 주입 방식으로 의존성을 `locator`에서 가져옵니다.
pub trait Component: Sized + Send + Sync + 'static {
    fn build(locator: &ServiceLocator) -> AppResult<Self>;
}

/// 타입 소거된 생성자
pub type Constructor = fn(&ServiceLocator) -> AppResult<Arc<dyn Any + Send + Sync>>;

/// 서비스 등록 정보 (`inventory`로 수집)
pub struct ServiceRegistration {
    pub name: &'static str,
    pub type_id: fn() -> TypeId,
    pub constructor: Constructor,
}

/// 리포지토리 등록 정보 (`inventory`로 수집)
pub struct RepositoryRegistration {
    pub name: &'static str,
    pub type_id: fn() -> TypeId,
    pub constructor: Constructor,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// `Component` 구현체를 타입 소거된 인스턴스로 생성합니다.
pub fn construct<T: Component>(locator: &ServiceLocator) -> AppResult<Arc<dyn Any + Send + Sync>> {
    Ok(Arc::new(T::build(locator)?))
}

/// 리포지토리를 레지스트리에 제출합니다.
macro_rules! register_repository {
    ($ty:ty, $name:literal) => {
        inventory::submit! {
            $crate::core::registry::RepositoryRegistration {
                name: $name,
                type_id: ::std::any::TypeId::of::<$ty>,
                constructor: $crate::core::registry::construct::<$ty>,
            }
        }
    };
}

/// 서비스를 레지스트리에 제출합니다.
macro_rules! register_service {
    ($ty:ty, $name:literal) => {
        inventory::submit! {
            $crate::core::registry::ServiceRegistration {
                name: $name,
                type_id: ::std::any::TypeId::of::<$ty>,
                constructor: $crate::core::registry::construct::<$ty>,
            }
        }
    };
}

pub(crate) use register_repository;
pub(crate) use register_service;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ComponentKind {
    Repository,
    Service,
}

#[derive(Clone, Copy)]
struct RegisteredComponent {
    name: &'static str,
    type_id: TypeId,
    kind: ComponentKind,
    constructor: Constructor,
}

/// TypeId → 등록 정보 캐시 (O(1) 조회)
static COMPONENT_CACHE: Lazy<HashMap<TypeId, RegisteredComponent>> = Lazy::new(|| {
    let mut cache = HashMap::new();

    for registration in inventory::iter::<RepositoryRegistration>() {
        cache.insert(
            (registration.type_id)(),
            RegisteredComponent {
                name: registration.name,
                type_id: (registration.type_id)(),
                kind: ComponentKind::Repository,
                constructor: registration.constructor,
            },
        );
    }
    let repositories = cache.len();
    print_cache_initialized("Repository", repositories);

    for registration in inventory::iter::<ServiceRegistration>() {
        cache.insert(
            (registration.type_id)(),
            RegisteredComponent {
                name: registration.name,
                type_id: (registration.type_id)(),
                kind: ComponentKind::Service,
                constructor: registration.constructor,
            },
        );
    }
    print_cache_initialized("Service", cache.len() - repositories);

    cache
});

thread_local! {
    // (로케이터 주소, 타입) 단위의 생성 중 스택. 순환 참조 감지용
    static RESOLVING: RefCell<Vec<(usize, TypeId)>> = const { RefCell::new(Vec::new()) };
}

/// 생성 중 표시를 스코프 종료 시 제거하는 가드
struct ResolvingGuard {
    key: (usize, TypeId),
}

impl Drop for ResolvingGuard {
    fn drop(&mut self) {
        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(pos) = stack.iter().rposition(|entry| *entry == self.key) {
                stack.remove(pos);
            }
        });
    }
}

/// 타입 기반 컴포넌트 레지스트리
#[derive(Default)]
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

impl ServiceLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 컴포넌트를 조회하고, 없으면 등록된 생성자로 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 등록되지 않은 타입, 순환 참조, 타입 불일치
    /// * 생성자가 반환한 에러
    pub fn get<T: Send + Sync + 'static>(&self) -> AppResult<Arc<T>> {
        let type_id = TypeId::of::<T>();
        let type_name = Self::clean_type_name(std::any::type_name::<T>());

        if let Some(instance) = self.lookup(&type_id) {
            return Self::downcast::<T>(instance, &type_name);
        }

        let registration = COMPONENT_CACHE.get(&type_id).copied().ok_or_else(|| {
            AppError::InternalError(format!(
                "등록되지 않은 컴포넌트: {}. ServiceLocator::set() 또는 register_service!/register_repository! 로 등록하세요",
                type_name
            ))
        })?;

        let instance = self.resolve(registration, &type_name)?;
        Self::downcast::<T>(instance, &type_name)
    }

    /// 조회에 실패하면 `None`을 반환합니다. 선택적 의존성(Redis 등)에 사용합니다.
    pub fn try_get<T: Send + Sync + 'static>(&self) -> Option<Arc<T>> {
        let type_id = TypeId::of::<T>();
        if self.lookup(&type_id).is_none() && !COMPONENT_CACHE.contains_key(&type_id) {
            return None;
        }

        match self.get::<T>() {
            Ok(instance) => Some(instance),
            Err(e) => {
                log::warn!("선택적 컴포넌트 조회 실패: {}", e);
                None
            }
        }
    }

    /// 인스턴스를 직접 등록합니다. 같은 타입이 있으면 교체합니다.
    pub fn set<T: Send + Sync + 'static>(&self, instance: Arc<T>) {
        let type_name = Self::clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", type_name);

        self.instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    pub fn contains<T: Send + Sync + 'static>(&self) -> bool {
        self.lookup(&TypeId::of::<T>()).is_some()
    }

    /// 등록된 모든 리포지토리와 서비스를 즉시 생성합니다.
    ///
    /// 리포지토리를 먼저, 서비스를 나중에 이름 순으로 생성하고 터미널에 요약을 출력합니다.
    pub fn initialize_all(&self) -> AppResult<()> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let mut components: Vec<RegisteredComponent> = COMPONENT_CACHE.values().copied().collect();
        components.sort_by_key(|c| c.name);

        let repositories: Vec<_> = components
            .iter()
            .filter(|c| c.kind == ComponentKind::Repository)
            .collect();
        let services: Vec<_> = components
            .iter()
            .filter(|c| c.kind == ComponentKind::Service)
            .collect();

        for (step, description, group) in [
            (1u8, "Creating Repository instances", &repositories),
            (2u8, "Creating Service instances", &services),
        ] {
            if group.is_empty() {
                continue;
            }

            print_step_start(step, description);
            for component in group.iter() {
                if self.lookup(&component.type_id).is_none() {
                    self.resolve(**component, component.name)?;
                }
                print_sub_task(component.name, "✓ Created");
            }
            print_step_complete(step, description, group.len());
        }

        print_final_summary(repositories.len(), services.len());
        Ok(())
    }

    fn resolve(
        &self,
        registration: RegisteredComponent,
        type_name: &str,
    ) -> AppResult<Arc<dyn Any + Send + Sync>> {
        let _guard = self.enter(registration.type_id, type_name)?;

        log::debug!("🔧 {} 생성 중 ({:?})", registration.name, registration.kind);
        let created = (registration.constructor)(self)?;

        // 동시에 생성된 경우 먼저 저장된 인스턴스를 사용
        Ok(self
            .instances
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(registration.type_id)
            .or_insert(created)
            .clone())
    }

    fn lookup(&self, type_id: &TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        self.instances
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(type_id)
            .cloned()
    }

    fn enter(&self, type_id: TypeId, type_name: &str) -> AppResult<ResolvingGuard> {
        let key = (self as *const Self as usize, type_id);

        RESOLVING.with(|stack| {
            let mut stack = stack.borrow_mut();
            if stack.contains(&key) {
                log::error!("❌ Circular dependency detected for type: {}", type_name);
                return Err(AppError::InternalError(format!(
                    "Circular dependency detected: {} is already being initialized",
                    type_name
                )));
            }
            stack.push(key);
            Ok(ResolvingGuard { key })
        })
    }

    fn downcast<T: Send + Sync + 'static>(
        instance: Arc<dyn Any + Send + Sync>,
        type_name: &str,
    ) -> AppResult<Arc<T>> {
        instance
            .downcast::<T>()
            .map_err(|_| AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", type_name)))
    }

    fn clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

/// 핸들러 인자로 컴포넌트를 주입받는 추출기
///
/// ```rust,ignore
/// #[get("")]
/// pub async fn index(labels: Inject<LabelService>) -> Result<HttpResponse, AppError> {
///     let labels = labels.find_all().await?;
///     Ok(HttpResponse::Ok().json(labels))
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

impl<T> Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Send + Sync + 'static> FromRequest for Inject<T> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .app_data::<web::Data<ServiceLocator>>()
            .ok_or_else(|| AppError::InternalError("ServiceLocator가 앱 데이터에 없습니다".to_string()))
            .and_then(|locator| locator.get::<T>())
            .map(Inject);

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting(String);

    struct Greeter {
        greeting: Arc<Greeting>,
    }

    impl Component for Greeter {
        fn build(locator: &ServiceLocator) -> AppResult<Self> {
            Ok(Self { greeting: locator.get()? })
        }
    }

    register_service!(Greeter, "greeter_service");

    struct Chicken;
    struct Egg;

    impl Component for Chicken {
        fn build(locator: &ServiceLocator) -> AppResult<Self> {
            locator.get::<Egg>()?;
            Ok(Chicken)
        }
    }

    impl Component for Egg {
        fn build(locator: &ServiceLocator) -> AppResult<Self> {
            locator.get::<Chicken>()?;
            Ok(Egg)
        }
    }

    register_repository!(Chicken, "chicken_repository");
    register_repository!(Egg, "egg_repository");

    #[test]
    fn test_set_and_get_manual_instance() {
        let locator = ServiceLocator::new();
        locator.set(Arc::new(Greeting("hello".to_string())));

        let greeting = locator.get::<Greeting>().unwrap();
        assert_eq!(greeting.0, "hello");
        assert!(locator.contains::<Greeting>());
    }

    #[test]
    fn test_registered_component_is_built_lazily_once() {
        let locator = ServiceLocator::new();
        locator.set(Arc::new(Greeting("hi".to_string())));

        assert!(!locator.contains::<Greeter>());
        let first = locator.get::<Greeter>().unwrap();
        let second = locator.get::<Greeter>().unwrap();

        assert_eq!(first.greeting.0, "hi");
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_dependency_is_an_error() {
        let locator = ServiceLocator::new();

        match locator.get::<Greeter>() {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("Greeting")),
            _ => panic!("Expected InternalError"),
        }
        assert!(!locator.contains::<Greeter>());
    }

    #[test]
    fn test_circular_dependency_is_detected() {
        let locator = ServiceLocator::new();

        match locator.get::<Chicken>() {
            Err(AppError::InternalError(msg)) => assert!(msg.contains("Circular dependency")),
            _ => panic!("Expected circular dependency error"),
        }
    }

    #[test]
    fn test_try_get_unregistered_returns_none() {
        let locator = ServiceLocator::new();
        assert!(locator.try_get::<String>().is_none());
    }

    #[test]
    fn test_locators_are_independent() {
        let a = ServiceLocator::new();
        let b = ServiceLocator::new();
        a.set(Arc::new(Greeting("a".to_string())));
        b.set(Arc::new(Greeting("b".to_string())));

        assert_eq!(a.get::<Greeter>().unwrap().greeting.0, "a");
        assert_eq!(b.get::<Greeter>().unwrap().greeting.0, "b");
    }

    #[test]
    fn test_clean_type_name() {
        assert_eq!(
            ServiceLocator::clean_type_name("task_manager_backend::services::labels::LabelService"),
            "LabelService"
        );
        assert_eq!(ServiceLocator::clean_type_name("i64"), "i64");
    }
}
