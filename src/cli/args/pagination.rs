//! Pagination argument types for list commands

use clap::Args;

use tfe_orgs::ListOptions;

/// Paging arguments for `org list`.
///
/// Values are forwarded to the server as-is; omitted values fall back to the
/// configured page size and the server's first page.
#[derive(Args, Debug, Default, Clone)]
pub struct PaginationArgs {
    /// Page number (1-indexed)
    #[arg(long, short = 'p')]
    pub page: Option<usize>,

    /// Results per page
    #[arg(long = "page-size", short = 'n')]
    pub page_size: Option<usize>,
}

impl PaginationArgs {
    /// Convert CLI args to list options, using `default_page_size` when no
    /// page size was given.
    pub fn to_options(&self, default_page_size: usize) -> ListOptions {
        let mut options = ListOptions::new().page_size(self.page_size.unwrap_or(default_page_size));

        if let Some(page) = self.page {
            options = options.page_number(page);
        }

        options
    }
}
