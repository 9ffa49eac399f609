pub mod task_record;
