mod catway;
