// Observer: a job board notifying every subscribed seeker about new postings.

use std::cell::RefCell;
use std::rc::Rc;

struct JobPost {
    title: String,
}

impl JobPost {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

trait JobObserver {
    fn on_job_posted(&self, job: &JobPost);
}

struct JobSeeker {
    name: String,
    inbox: RefCell<Vec<String>>,
}

impl JobSeeker {
    fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            inbox: RefCell::new(Vec::new()),
        })
    }

    fn inbox(&self) -> Vec<String> {
        self.inbox.borrow().clone()
    }
}

impl JobObserver for JobSeeker {
    fn on_job_posted(&self, job: &JobPost) {
        println!("{} has been notified of a new posting: {}", self.name, job.title);
        self.inbox.borrow_mut().push(job.title.clone());
    }
}

#[derive(Default)]
struct JobBoard {
    subscribers: Vec<Rc<dyn JobObserver>>,
}

impl JobBoard {
    fn subscribe(&mut self, seeker: Rc<dyn JobObserver>) {
        self.subscribers.push(seeker);
    }

    fn add_job(&self, job: JobPost) {
        for subscriber in &self.subscribers {
            subscriber.on_job_posted(&job);
        }
    }
}

fn main() {
    let john = JobSeeker::new("John");
    let jane = JobSeeker::new("Jane");

    let mut board = JobBoard::default();
    board.subscribe(Rc::clone(&john) as Rc<dyn JobObserver>);
    board.subscribe(Rc::clone(&jane) as Rc<dyn JobObserver>);

    board.add_job(JobPost::new("Postman"));
    board.add_job(JobPost::new("Lighthouse keeper"));

    println!("John's inbox: {:?}", john.inbox());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_subscriber_is_notified() {
        let john = JobSeeker::new("John");
        let jane = JobSeeker::new("Jane");

        let mut board = JobBoard::default();
        board.subscribe(Rc::clone(&john) as Rc<dyn JobObserver>);
        board.subscribe(Rc::clone(&jane) as Rc<dyn JobObserver>);

        board.add_job(JobPost::new("Postman"));

        assert_eq!(john.inbox(), vec!["Postman"]);
        assert_eq!(jane.inbox(), vec!["Postman"]);
    }

    #[test]
    fn test_notifications_arrive_in_posting_order() {
        let john = JobSeeker::new("John");

        let mut board = JobBoard::default();
        board.subscribe(Rc::clone(&john) as Rc<dyn JobObserver>);

        board.add_job(JobPost::new("Postman"));
        board.add_job(JobPost::new("Baker"));

        assert_eq!(john.inbox(), vec!["Postman", "Baker"]);
    }

    #[test]
    fn test_late_subscribers_miss_earlier_postings() {
        let john = JobSeeker::new("John");
        let jane = JobSeeker::new("Jane");

        let mut board = JobBoard::default();
        board.subscribe(Rc::clone(&john) as Rc<dyn JobObserver>);
        board.add_job(JobPost::new("Postman"));

        board.subscribe(Rc::clone(&jane) as Rc<dyn JobObserver>);
        board.add_job(JobPost::new("Baker"));

        assert_eq!(john.inbox(), vec!["Postman", "Baker"]);
        assert_eq!(jane.inbox(), vec!["Baker"]);
    }

    #[test]
    fn test_board_with_no_subscribers_is_fine() {
        let board = JobBoard::default();
        board.add_job(JobPost::new("Postman"));
    }
}
