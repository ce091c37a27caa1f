use super::error::FetchError;
use contracts::shared::paging_select::{FetchPageArgs, OptionRecord, PageResponse};
use std::future::Future;

/// Элемент, который можно выбрать в селекте
pub trait SelectOption {
    /// Уникальный ключ, он же значение селекта
    fn code(&self) -> String;
    fn label(&self) -> String;
}

impl SelectOption for OptionRecord {
    fn code(&self) -> String {
        self.code.clone()
    }

    fn label(&self) -> String {
        OptionRecord::label(self)
    }
}

/// Источник страниц опций
///
/// Ошибка, возвращённая сразу (готовым `Err`), и ошибка после ожидания
/// обрабатываются одинаково.
pub trait OptionSource<T> {
    fn fetch_page(
        &self,
        args: FetchPageArgs,
    ) -> impl Future<Output = Result<PageResponse<T>, FetchError>>;
}

/// Источник на основе асинхронной функции, см. [`source_fn`]
#[derive(Clone)]
pub struct FnSource<F> {
    f: F,
}

/// Оборачивает `Fn(FetchPageArgs) -> Future` в [`OptionSource`]
pub fn source_fn<F>(f: F) -> FnSource<F> {
    FnSource { f }
}

impl<T, F, Fut> OptionSource<T> for FnSource<F>
where
    F: Fn(FetchPageArgs) -> Fut,
    Fut: Future<Output = Result<PageResponse<T>, FetchError>>,
{
    fn fetch_page(
        &self,
        args: FetchPageArgs,
    ) -> impl Future<Output = Result<PageResponse<T>, FetchError>> {
        (self.f)(args)
    }
}
