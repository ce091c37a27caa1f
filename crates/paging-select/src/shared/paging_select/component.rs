use super::config::{ReloadOnOpen, SelectConfig, DEFAULT_PAGE_SIZE};
use super::coordinator::{PagingCoordinator, SelectEvent, SelectListener};
use super::state::PageState;
use super::traits::{OptionSource, SelectOption};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use wasm_bindgen::JsCast;

/// Расстояние до конца списка (px), при котором догружается следующая страница
const SCROLL_THRESHOLD_PX: i32 = 24;

/// Переводит события координатора в сигналы и колбэки компонента
struct SignalListener<T: Send + Sync + 'static> {
    value: RwSignal<String>,
    state: RwSignal<PageState<T>>,
    on_related: Option<Callback<Option<T>>>,
    on_clear: Option<Callback<()>>,
}

impl<T> SelectListener<T> for SignalListener<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn on_event(&self, event: SelectEvent<T>) {
        match event {
            SelectEvent::UpdateModelValue(code) => self.value.set(code),
            SelectEvent::SetRelatedValue(record) => {
                if let Some(handler) = self.on_related {
                    handler.run(record);
                }
            }
            SelectEvent::Clear => {
                self.value.set(String::new());
                if let Some(handler) = self.on_clear {
                    handler.run(());
                }
            }
        }
    }

    fn on_state_change(&self, state: &PageState<T>) {
        self.state.set(state.clone());
    }
}

/// Селект с постраничной подгрузкой опций
///
/// Загружает первую страницу при монтировании, догружает следующие при прокрутке
/// списка до конца и сбрасывается при смене `page_size` или `related_key`.
#[component]
pub fn PagingSelect<T, S>(
    /// Источник страниц опций
    source: S,
    /// Выбранный код (двусторонняя привязка)
    value: RwSignal<String>,
    /// Размер страницы
    #[prop(into, default = Signal::stored(DEFAULT_PAGE_SIZE))]
    page_size: Signal<usize>,
    /// Ключ связи, передаётся в источник
    #[prop(into, default = Signal::stored(None))]
    related_key: Signal<Option<String>>,
    /// Поведение при открытии списка
    #[prop(optional)]
    reload_on_open: ReloadOnOpen,
    /// Полная запись выбранной опции
    #[prop(optional)]
    on_related: Option<Callback<Option<T>>>,
    /// Пользователь очистил выбор
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
    /// Текст при пустом значении
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
) -> impl IntoView
where
    T: SelectOption + Clone + Send + Sync + 'static,
    S: OptionSource<T> + 'static,
{
    let state = RwSignal::new(PageState::<T>::default());
    let (open, set_open) = signal(false);

    let mut config = SelectConfig::default()
        .with_page_size(page_size.get_untracked())
        .with_reload_on_open(reload_on_open);
    config.related_key = related_key.get_untracked();

    let listener = SignalListener {
        value,
        state,
        on_related,
        on_clear,
    };
    let coordinator = match PagingCoordinator::new(source, config, listener) {
        Ok(coordinator) => StoredValue::new_local(Rc::new(coordinator)),
        Err(err) => {
            log::error!("paging select: {}", err);
            return view! {
                <div class="paging-select paging-select--error">{err.to_string()}</div>
            }
            .into_any();
        }
    };

    // Первый запуск - загрузка, дальше сравнение с прошлыми параметрами
    Effect::new(move |prev: Option<(usize, Option<String>)>| {
        let next = (page_size.get(), related_key.get());
        let coordinator = coordinator.get_value();
        match &prev {
            None => spawn_local(async move {
                coordinator.initialize().await;
            }),
            Some(prev) if *prev != next => {
                let mut config = coordinator.config();
                config.page_size = next.0;
                config.related_key = next.1.clone();
                spawn_local(async move {
                    coordinator.apply_config(config).await;
                });
            }
            Some(_) => {}
        }
        next
    });

    let handle_visible = move |is_open: bool| {
        set_open.set(is_open);
        if is_open {
            let coordinator = coordinator.get_value();
            spawn_local(async move {
                coordinator.ensure_loaded().await;
            });
        }
    };

    let handle_select = move |code: String| {
        coordinator.get_value().select(&code);
        set_open.set(false);
    };

    let handle_clear = move || {
        coordinator.get_value().clear();
        set_open.set(false);
    };

    let on_scroll = move |ev: web_sys::Event| {
        let Some(list) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return;
        };
        let remaining = list.scroll_height() - list.scroll_top() - list.client_height();
        if remaining <= SCROLL_THRESHOLD_PX {
            let coordinator = coordinator.get_value();
            spawn_local(async move {
                coordinator.load_more().await;
            });
        }
    };

    let selected_label = move || {
        let code = value.get();
        if code.is_empty() {
            return None;
        }
        Some(state.with(|s| {
            s.options
                .iter()
                .find(|option| option.code() == code)
                .map(|option| option.label())
                .unwrap_or_else(|| code.clone())
        }))
    };

    let status_row = move || {
        state.with(|s| {
            if s.loading {
                Some(view! { <li class="paging-select__status">"Загрузка..."</li> }.into_any())
            } else if let Some(err) = s.error.clone() {
                Some(
                    view! {
                        <li class="paging-select__status paging-select__status--error">
                            "Ошибка загрузки: " {err}
                        </li>
                    }
                    .into_any(),
                )
            } else if s.options.is_empty() {
                Some(
                    view! { <li class="paging-select__status">"Нет доступных элементов"</li> }
                        .into_any(),
                )
            } else {
                None
            }
        })
    };

    view! {
        <div class=move || {
            if open.get() { "paging-select paging-select--open" } else { "paging-select" }
        }>
            <div
                class="paging-select__control"
                on:click=move |_| handle_visible(!open.get_untracked())
            >
                {move || match selected_label() {
                    Some(label) => view! {
                        <span class="paging-select__value">{label}</span>
                    }.into_any(),
                    None => view! {
                        <span class="paging-select__placeholder">
                            {placeholder.get().unwrap_or_else(|| "Выберите...".to_string())}
                        </span>
                    }.into_any(),
                }}
                <Show when=move || !value.get().is_empty()>
                    <button
                        class="paging-select__clear"
                        title="Очистить"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            handle_clear();
                        }
                    >
                        "×"
                    </button>
                </Show>
            </div>
            <Show when=move || open.get()>
                <ul class="paging-select__dropdown" on:scroll=on_scroll>
                    <For
                        each=move || state.with(|s| s.options.clone())
                        key=|option| option.code()
                        children=move |option| {
                            let code = option.code();
                            let code_for_selected = code.clone();
                            let is_selected = move || value.get() == code_for_selected;
                            view! {
                                <li
                                    class="paging-select__option"
                                    class:selected=is_selected
                                    on:click=move |_| handle_select(code.clone())
                                >
                                    {option.label()}
                                </li>
                            }
                        }
                    />
                    {status_row}
                </ul>
            </Show>
        </div>
    }
    .into_any()
}
