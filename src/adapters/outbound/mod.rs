mod redis_queue_store;

pub use redis_queue_store::RedisQueueStore;
