//! App state and main loop: input handling, applying poll events to the session, and drawing.

use std::{
    io,
    time::{Duration, Instant},
};

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Color,
    Terminal,
};
use tokio::{sync::mpsc, time::sleep};
use tracing::{info, warn};

use sysglance::fetch::SnapshotSource;
use sysglance::poller::{Delivery, PollEvent, Poller};
use sysglance::session::{Alert, Session};

use crate::ui::{
    alert::draw_alert, charts::draw_line_chart, cpu::draw_cpu_details, disk::draw_disk,
    gpu::draw_gpu, header::draw_header, insights::draw_insights, mem::draw_mem, net::draw_net,
    processes::draw_top_processes, sysinfo::draw_sysinfo,
};

const UI_TICK: Duration = Duration::from_millis(50);

pub struct App {
    session: Session,
    endpoint: String,
    interval: Duration,

    // Critical popup; while set, input only goes to it
    alert: Option<Alert>,

    should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(endpoint: String, interval: Duration) -> Self {
        Self {
            session: Session::new(),
            endpoint,
            interval,
            alert: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub async fn run<S: SnapshotSource>(&mut self, source: S) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel(1);
        let poller = Poller::new(source, self.interval).start(tx);

        // Terminal setup
        enable_raw_mode().context("enabling raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal, &mut rx).await;

        poller.stop();

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        poller.join().await;
        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &mut mpsc::Receiver<Delivery>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                match event::read()? {
                    Event::Key(k) if k.kind == KeyEventKind::Press => self.handle_key(k),
                    Event::Resize(_, _) => self.dirty = true,
                    _ => {}
                }
            }
            if self.should_quit {
                info!("quit requested");
                break;
            }

            while let Ok(delivery) = rx.try_recv() {
                delivery.complete(|ev| self.on_poll_event(ev));
            }

            // Draw only when a chart or the input asked for it
            let charts = self.session.take_redraw();
            if charts || std::mem::take(&mut self.dirty) {
                terminal.draw(|f| self.draw(f))?;
            }

            sleep(UI_TICK).await;
        }

        Ok(())
    }

    fn handle_key(&mut self, k: KeyEvent) {
        if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.alert.is_some() {
            if matches!(k.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
                self.dirty = true;
            }
            return;
        }
        if matches!(
            k.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) {
            self.should_quit = true;
        }
    }

    fn on_poll_event(&mut self, ev: PollEvent) {
        let label = chrono::Local::now().format("%H:%M:%S").to_string();
        if let Some(alert) = self.session.apply(ev, label, Instant::now()) {
            warn!("{}", alert.message());
            self.alert = Some(alert);
        }
        // header shows failure state even when no chart moved
        self.dirty = true;
    }

    fn draw(&self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();
        let latest = self.session.latest();

        // Root rows: header, system info, cpu, memory/gpu, bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),   // header
                Constraint::Length(1),   // system info
                Constraint::Ratio(1, 3), // cpu chart + details
                Constraint::Ratio(1, 4), // memory + gpu charts, gauges
                Constraint::Min(10),     // disk/net/insights (left), processes (right)
            ])
            .split(area);

        draw_header(f, rows[0], &self.session, &self.endpoint);
        draw_sysinfo(f, rows[1], latest);

        let cpu_lr = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(rows[2]);
        draw_line_chart(f, cpu_lr[0], &self.session.cpu_chart, Color::Cyan);
        draw_cpu_details(f, cpu_lr[1], latest);

        let mid = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(33),
                Constraint::Percentage(33),
                Constraint::Percentage(34),
            ])
            .split(rows[3]);
        draw_line_chart(f, mid[0], &self.session.mem_chart, Color::Magenta);
        draw_line_chart(f, mid[1], &self.session.gpu_chart, Color::Green);
        let gauges = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(mid[2]);
        draw_mem(f, gauges[0], latest);
        draw_gpu(f, gauges[1], latest);

        let bottom_lr = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[4]);
        let insight_h = self
            .session
            .assessment()
            .map_or(2, |a| a.insights.len() as u16)
            + 2;
        let left_stack = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(insight_h),
            ])
            .split(bottom_lr[0]);
        draw_disk(f, left_stack[0], latest);
        draw_net(f, left_stack[1], latest);
        draw_insights(f, left_stack[2], self.session.assessment());

        let procs = latest.map(|s| s.processes_top.as_slice()).unwrap_or(&[]);
        draw_top_processes(f, bottom_lr[1], &self.session.processes, procs);

        if let Some(alert) = &self.alert {
            draw_alert(f, area, alert);
        }
    }
}
