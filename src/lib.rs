pub mod shared {
    pub mod infrastructure {
        pub mod datatable;
        pub mod flash;
        pub mod html;
    }
}

pub mod modules {
    pub mod time_logs {
        pub mod core {
            pub mod employee;
            pub mod errors;
            pub mod ownership;
            pub mod project;
            pub mod rules;
            pub mod time_log;
        }
        pub mod use_cases {
            pub mod list_time_logs {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod time_logs_table {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod log_time {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod edit_time_log {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_time_log {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod form;
                pub mod messages;
                pub mod paths;
                pub mod views;
            }
            pub mod outbound {
                pub mod repositories;
                pub mod repositories_in_memory;
            }
        }
    }
}

pub mod shell;
