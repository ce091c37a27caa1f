//! Координатор постраничной загрузки опций
//!
//! Не зависит от Leptos: владеет [`PageState`], обращается к [`OptionSource`]
//! и сообщает наружу о выборе через [`SelectListener`]. Однопоточный, без блокировок:
//! из нескольких запросов в полёте состояние меняет только последний отправленный,
//! остальные отбрасываются по токену.

use super::config::{ReloadOnOpen, SelectConfig};
use super::error::{ConfigError, FetchError};
use super::state::PageState;
use super::traits::{OptionSource, SelectOption};
use contracts::shared::paging_select::FetchPageArgs;
use log::{debug, warn};
use std::cell::RefCell;

/// Исходящие события селекта
#[derive(Debug, Clone, PartialEq)]
pub enum SelectEvent<T> {
    /// Новое значение (`update:modelValue`), пустая строка при сбросе
    UpdateModelValue(String),
    /// Полная запись выбранной опции; `None`, если код не найден
    SetRelatedValue(Option<T>),
    /// Пользователь очистил выбор
    Clear,
}

/// Получатель событий и изменений состояния
///
/// Вызывается синхронно; не должен синхронно вызывать методы координатора.
pub trait SelectListener<T> {
    fn on_event(&self, event: SelectEvent<T>);

    fn on_state_change(&self, _state: &PageState<T>) {}
}

impl<T, F> SelectListener<T> for F
where
    F: Fn(SelectEvent<T>),
{
    fn on_event(&self, event: SelectEvent<T>) {
        self(event)
    }
}

/// Результат операции загрузки
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// Страница применена к состоянию
    Applied { page: usize, received: usize },
    /// Предусловия не выполнены, запрос не отправлялся
    Skipped,
    /// Ответ пришёл после сброса и был проигнорирован
    Discarded,
    /// Источник вернул ошибку, состояние не изменилось
    Failed(FetchError),
}

pub struct PagingCoordinator<T, S> {
    source: S,
    config: RefCell<SelectConfig>,
    state: RefCell<PageState<T>>,
    listener: Box<dyn SelectListener<T>>,
}

impl<T, S> PagingCoordinator<T, S>
where
    T: SelectOption + Clone,
    S: OptionSource<T>,
{
    pub fn new(
        source: S,
        config: SelectConfig,
        listener: impl SelectListener<T> + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            source,
            config: RefCell::new(config),
            state: RefCell::new(PageState::default()),
            listener: Box::new(listener),
        })
    }

    pub fn config(&self) -> SelectConfig {
        self.config.borrow().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&PageState<T>) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn snapshot(&self) -> PageState<T> {
        self.state.borrow().clone()
    }

    /// Первая загрузка при монтировании
    pub async fn initialize(&self) -> LoadOutcome {
        self.load_page(1, true).await
    }

    /// Открытие выпадающего списка
    pub async fn ensure_loaded(&self) -> LoadOutcome {
        let reload = {
            let state = self.state.borrow();
            match self.config.borrow().reload_on_open {
                ReloadOnOpen::Always => true,
                _ if state.loading => false,
                ReloadOnOpen::WhenEmpty => state.options.is_empty(),
                ReloadOnOpen::WhenEmptyOrFailed => {
                    state.options.is_empty() || state.error.is_some()
                }
            }
        };
        if !reload {
            return LoadOutcome::Skipped;
        }
        self.reload().await
    }

    /// Следующая страница (прокрутка до конца списка)
    pub async fn load_more(&self) -> LoadOutcome {
        let next_page = {
            let state = self.state.borrow();
            if !state.can_load_more() {
                debug!(
                    "paging select: load_more skipped (has_more_data={}, loading={})",
                    state.has_more_data, state.loading
                );
                return LoadOutcome::Skipped;
            }
            state.page + 1
        };
        self.load_page(next_page, false).await
    }

    pub fn select(&self, code: &str) {
        let matched = self
            .state
            .borrow()
            .options
            .iter()
            .find(|option| option.code() == code)
            .cloned();
        if matched.is_none() {
            debug!("paging select: option {} is not among loaded options", code);
        }
        self.emit(SelectEvent::UpdateModelValue(code.to_string()));
        self.emit(SelectEvent::SetRelatedValue(matched));
    }

    pub fn clear(&self) {
        self.emit(SelectEvent::Clear);
    }

    /// Сравнивает новую конфигурацию с текущей и сбрасывает сессию при изменении
    /// `page_size` или `related_key`. Смена `related_key` дополнительно очищает значение.
    pub async fn apply_config(&self, next: SelectConfig) -> LoadOutcome {
        if let Err(err) = next.validate() {
            warn!("paging select: config rejected: {}", err);
            return LoadOutcome::Skipped;
        }
        let (key_changed, size_changed) = {
            let current = self.config.borrow();
            (
                current.related_key != next.related_key,
                current.page_size != next.page_size,
            )
        };
        *self.config.borrow_mut() = next;

        if key_changed {
            self.emit(SelectEvent::UpdateModelValue(String::new()));
        }
        if key_changed || size_changed {
            self.reload().await
        } else {
            LoadOutcome::Skipped
        }
    }

    pub async fn set_page_size(&self, page_size: usize) -> LoadOutcome {
        let next = self.config().with_page_size(page_size);
        self.apply_config(next).await
    }

    pub async fn set_related_key(&self, related_key: Option<String>) -> LoadOutcome {
        let mut next = self.config();
        next.related_key = related_key;
        self.apply_config(next).await
    }

    /// Полный сброс и загрузка первой страницы
    pub async fn reload(&self) -> LoadOutcome {
        self.state.borrow_mut().reset();
        self.notify();
        self.load_page(1, true).await
    }

    async fn load_page(&self, page: usize, fresh: bool) -> LoadOutcome {
        let (token, args) = {
            let mut state = self.state.borrow_mut();
            let config = self.config.borrow();
            let token = state.begin_request();
            let args = FetchPageArgs::new(page, config.page_size, config.related_key.clone());
            (token, args)
        };
        debug!("paging select: request #{} {:?}", token, args);
        self.notify();

        let result = self.source.fetch_page(args).await;

        let outcome = {
            let mut state = self.state.borrow_mut();
            if !state.is_current(token) {
                debug!(
                    "paging select: response #{} discarded, current is #{}",
                    token, state.request_token
                );
                return LoadOutcome::Discarded;
            }
            match result {
                Ok(response) => {
                    let received = response.list.len();
                    state.apply_page(page, response.list, response.total, fresh);
                    LoadOutcome::Applied { page, received }
                }
                Err(err) => {
                    warn!("paging select: failed to load page {}: {}", page, err);
                    state.apply_failure(err.to_string());
                    LoadOutcome::Failed(err)
                }
            }
        };
        self.notify();
        outcome
    }

    fn emit(&self, event: SelectEvent<T>) {
        self.listener.on_event(event);
    }

    fn notify(&self) {
        let state = self.state.borrow();
        self.listener.on_state_change(&state);
    }
}
