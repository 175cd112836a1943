pub mod u508_nl_query;
