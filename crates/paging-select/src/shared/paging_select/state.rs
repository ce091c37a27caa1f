/// Состояние постраничной загрузки опций
#[derive(Clone, Debug, PartialEq)]
pub struct PageState<T> {
    /// Последняя полностью загруженная страница (0 до первой загрузки)
    pub page: usize,
    pub options: Vec<T>,
    /// Общее количество записей; `None`, пока сессия ничего не загрузила
    pub total: Option<usize>,
    pub has_more_data: bool,
    pub loading: bool,
    /// Текст последней ошибки загрузки в текущей сессии
    pub error: Option<String>,
    /// Номер последнего отправленного запроса
    pub request_token: u64,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            page: 0,
            options: Vec::new(),
            total: None,
            has_more_data: false,
            loading: false,
            error: None,
            request_token: 0,
        }
    }
}

impl<T> PageState<T> {
    /// Сброс сессии: страница, опции и total. Токен не сбрасывается.
    pub fn reset(&mut self) {
        self.page = 0;
        self.options.clear();
        self.total = None;
        self.has_more_data = false;
        self.error = None;
    }

    /// Регистрирует новый запрос и возвращает его токен
    pub fn begin_request(&mut self) -> u64 {
        self.request_token += 1;
        self.loading = true;
        self.error = None;
        self.request_token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.request_token == token
    }

    /// Применяет загруженную страницу. `fresh` заменяет список, иначе дописывает в конец.
    pub fn apply_page(&mut self, page: usize, list: Vec<T>, total: i64, fresh: bool) {
        if fresh {
            self.options = list;
        } else {
            self.options.extend(list);
        }
        self.total = Some(usize::try_from(total).unwrap_or(0));
        self.page = page;
        self.loading = false;
        self.recompute_has_more();
    }

    pub fn apply_failure(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    fn recompute_has_more(&mut self) {
        self.has_more_data = matches!(self.total, Some(total) if self.options.len() < total);
    }

    pub fn can_load_more(&self) -> bool {
        self.has_more_data && !self.loading
    }
}
