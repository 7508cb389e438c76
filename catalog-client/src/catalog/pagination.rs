//! 分页引擎
//!
//! 纯计算: 总页数、当前页切片、页码按钮布局 (含省略号压缩)。
//! 不做任何 I/O，状态只有三个数字。

/// 默认每页商品数
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// 超过此页数时使用省略号压缩
const MAX_UNCOMPRESSED_PAGES: usize = 7;

/// 页码控件中的一个元素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// 完整的分页控件布局
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    pub buttons: Vec<PageButton>,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

impl PageControls {
    /// 按钮的页码序列，省略号记为 `None` (便于断言)
    pub fn numbers(&self) -> Vec<Option<usize>> {
        self.buttons
            .iter()
            .map(|b| match b {
                PageButton::Page { number, .. } => Some(*number),
                PageButton::Ellipsis => None,
            })
            .collect()
    }
}

/// 分页状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
    total_items: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    /// `page_size` 至少为 1
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
            total_items: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// 设置条目总数并回到第 1 页
    pub fn reset(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = 1;
    }

    /// `ceil(total_items / page_size)`，无条目时为 0
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// 第 `page` 页的下标范围，越界时为空
    pub fn range(&self, page: usize) -> std::ops::Range<usize> {
        if page == 0 || page > self.total_pages() {
            return 0..0;
        }
        let start = (page - 1) * self.page_size;
        let end = (page * self.page_size).min(self.total_items);
        start..end
    }

    /// 第 `page` 页的切片
    ///
    /// 以 `items.len()` 为准截断，调用方无需保证与 `total_items` 一致。
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let range = self.range(page);
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// 当前页切片
    pub fn current_slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        self.slice(items, self.current_page)
    }

    /// 跳转到指定页，限制在 `[1, max(total_pages, 1)]`
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages().max(1));
    }

    /// 下一页；已是最后一页时不动
    pub fn next(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// 上一页；已是第一页时不动
    pub fn previous(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// 计算页码按钮布局
    ///
    /// - 总页数 ≤ 7: 显示全部页码
    /// - 否则: 首页、窗口 (当前页 ±1，靠近两端时扩展到 4 个)、末页，
    ///   窗口与首末页之间不相邻时插入省略号
    pub fn layout(&self) -> PageControls {
        let total = self.total_pages();
        let current = self.current_page;
        let mut buttons = Vec::new();

        let page = |number: usize| PageButton::Page {
            number,
            active: number == current,
        };

        if total > 0 {
            buttons.push(page(1));
        }

        if total <= MAX_UNCOMPRESSED_PAGES {
            buttons.extend((2..=total).map(page));
        } else {
            if current > 3 {
                buttons.push(PageButton::Ellipsis);
            }

            let mut start = current.saturating_sub(1).max(2);
            let mut end = (current + 1).min(total - 1);
            if current <= 3 {
                end = 4;
            }
            if current >= total - 2 {
                start = total - 3;
            }

            buttons.extend((start..=end).filter(|p| *p > 1 && *p < total).map(page));

            if current < total - 2 {
                buttons.push(PageButton::Ellipsis);
            }
            buttons.push(page(total));
        }

        PageControls {
            buttons,
            previous_disabled: current == 1,
            next_disabled: current == total,
        }
    }
}
