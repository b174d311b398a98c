pub mod city;
pub mod citypage;
pub mod site_list;
